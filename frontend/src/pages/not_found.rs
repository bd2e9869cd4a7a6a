use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"The page you're looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                    padding: 24px;
                }
                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                    color: #1E90FF;
                }
                .not-found p {
                    color: #666;
                }
                .not-found-home {
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
