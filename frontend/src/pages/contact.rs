use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{contact_section::ContactSection, footer::Footer};
use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="contact-page">
            <Link<Route> to={Route::Home} classes="back-home">
                {"← Back to Home"}
            </Link<Route>>
            <ContactSection />
            <Footer />
            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #111827;
                }
                .back-home {
                    position: fixed;
                    top: 90px;
                    left: 24px;
                    z-index: 20;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: #fff;
                    color: #1E1E1E;
                    text-decoration: none;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
                }
                "#}
            </style>
        </div>
    }
}
