
/// Compile-time override, e.g. `FLONEO_API_URL=https://api.example.com/api trunk build`.
const API_URL_OVERRIDE: Option<&str> = option_env!("FLONEO_API_URL");

/// Requests that take longer than this are reported as timed out.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Wheel distance (in wheel-delta pixels) needed to reveal one stacked card.
pub const SCROLL_BUDGET_PER_CARD: f64 = 600.0;

/// Identical cache keys requested within this window share one request.
pub const CACHE_DEDUP_WINDOW_SECS: i64 = 60;

/// How often a mounted cached section checks whether its key is due.
pub const CACHE_REFRESH_CHECK_MS: u32 = 60_000;

#[cfg(debug_assertions)]
fn default_backend_url() -> &'static str {
    "http://127.0.0.1:8000/api"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_backend_url() -> &'static str {
    "https://flo-do2v.onrender.com/api"  // Production URL
}

pub fn get_backend_url() -> &'static str {
    API_URL_OVERRIDE
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(default_backend_url)
}

/// Joins an endpoint path like `/hero/` onto the backend base URL.
pub fn api_url(path: &str) -> String {
    join_url(get_backend_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
