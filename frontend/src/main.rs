use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod blog;
mod config;
mod contact;
mod content;
mod fetch;
mod motion;

mod components {
    pub mod benefits;
    pub mod chat_mockup;
    pub mod contact_form;
    pub mod contact_section;
    pub mod cta_modal;
    pub mod faq_section;
    pub mod footer;
    pub mod hero;
    pub mod metrics;
    pub mod services_scroll;
    pub mod social_section;
    pub mod viewport;
    pub mod why_choose_us;
}
mod pages {
    pub mod blog_detail;
    pub mod blogs;
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod not_found;
}

use components::cta_modal::{use_cta_modal, CtaModalProvider};
use fetch::{use_cached, CacheKey};
use pages::{
    blog_detail::BlogDetail,
    blogs::Blogs,
    contact::Contact,
    home::Home,
    legal::{PrivacyPolicyPage, TermsAndConditions},
    not_found::NotFound,
};

/// Nav turns solid once the page has scrolled this far.
const NAV_SOLID_AFTER_PX: i32 = 50;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blogs")]
    Blogs,
    #[at("/blogs/:id")]
    BlogDetail { id: String },
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a backend-provided link, when it points inside the app.
    pub fn internal(href: &str) -> Option<Route> {
        if !href.starts_with('/') || href.contains('#') {
            return None;
        }
        let path = match href.trim_end_matches('/') {
            "" => "/",
            "/privacy" => "/privacy-policy",
            path => path,
        };
        Route::recognize(path).filter(|route| *route != Route::NotFound)
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Blogs => {
            info!("Rendering Blogs page");
            html! { <Blogs /> }
        },
        Route::BlogDetail { id } => {
            info!("Rendering Blog page for {}", id);
            html! { <BlogDetail {id} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::PrivacyPolicy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicyPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let modal = use_cta_modal();
    let items = use_cached(CacheKey::NavigationItems, api::navigation_items);
    let items = content::visible_navigation(&content::or_fallback(
        items.data.as_deref(),
        content::fallback_navigation,
    ));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = {
                let window = window.clone();
                let mut last = false;
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .as_ref()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map_or(0, |e| e.scroll_top());
                    let scrolled = scroll_top > NAV_SOLID_AFTER_PX;
                    if scrolled != last {
                        last = scrolled;
                        is_scrolled.set(scrolled);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open_modal = {
        let open = modal.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"floneo"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for items.iter().map(|item| {
                        let link = match Route::internal(&item.href) {
                            Some(route) => html! {
                                <Link<Route> to={route} classes="nav-link">{&item.label}</Link<Route>>
                            },
                            None => html! {
                                <a href={item.href.clone()} class="nav-link">{&item.label}</a>
                            },
                        };
                        html! { <div key={item.id} onclick={close_menu.clone()}>{link}</div> }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <button class="nav-cta" onclick={open_modal}>
                            {"Contact Sales"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    height: 74px;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1300px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 24px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.6rem;
                    font-weight: 600;
                    color: #0b1b3f;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: #333;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #1E90FF;
                }
                .nav-cta {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #333;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: #fff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CtaModalProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </CtaModalProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    info!("Backend at {}", config::get_backend_url());

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_links_resolve_to_routes() {
        assert_eq!(Route::internal("/blogs"), Some(Route::Blogs));
        assert_eq!(Route::internal("/contact/"), Some(Route::Contact));
        assert_eq!(Route::internal("/privacy"), Some(Route::PrivacyPolicy));
        assert_eq!(
            Route::internal("/blogs/no-code"),
            Some(Route::BlogDetail { id: "no-code".to_string() })
        );
        assert_eq!(Route::internal("/"), Some(Route::Home));
    }

    #[test]
    fn anchors_and_external_links_stay_plain() {
        assert_eq!(Route::internal("/#services"), None);
        assert_eq!(Route::internal("https://linkedin.com/company/floneo"), None);
        assert_eq!(Route::internal("/does-not-exist"), None);
    }
}
