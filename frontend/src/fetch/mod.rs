//! Per-call-site data fetching: a framework-neutral store plus Yew hooks.

pub mod cell;
pub mod gate;
pub mod hooks;
pub mod shared;

pub use cell::FetchState;
pub use hooks::{use_cached, use_client_fetch, use_fetch};
pub use shared::CacheKey;
