use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::{use_cached, CacheKey};
use crate::Route;

/// Internal footer links route through the router; anything else is a plain
/// anchor.
fn footer_link(url: &str, label: &str) -> Html {
    match Route::internal(url) {
        Some(route) => html! { <Link<Route> to={route}>{label.to_string()}</Link<Route>> },
        None => html! { <a href={url.to_string()}>{label.to_string()}</a> },
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let section = use_cached(CacheKey::FooterSection, api::enhanced_footer_section);
    let social = use_cached(CacheKey::SocialLinks, api::social_links);

    let footer = section
        .data
        .as_deref()
        .cloned()
        .unwrap_or_else(content::fallback_footer);
    let links = social
        .data
        .as_deref()
        .map(|links| content::visible_social_links(links))
        .unwrap_or_default();

    html! {
        <footer class="site-footer">
            <div class="footer-brand">{&footer.company_name}</div>
            <p class="footer-tagline">{&footer.tagline}</p>
            <p class="footer-description">{&footer.description}</p>
            if !links.is_empty() {
                <ul class="footer-social">
                    { for links.iter().map(|link| html! {
                        <li key={link.id}>
                            <a href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                                { if link.platform_name.is_empty() { &link.platform } else { &link.platform_name } }
                            </a>
                        </li>
                    }) }
                </ul>
            }
            <div class="footer-bottom">
                <span>{&footer.copyright_text}</span>
                <div class="footer-legal">
                    { footer_link(&footer.privacy_policy_url, &footer.privacy_policy_text) }
                    { footer_link(&footer.terms_conditions_url, &footer.terms_conditions_text) }
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #f3f3f3;
                    padding: 8rem 3rem 3rem;
                    color: #1E1E1E;
                }
                .footer-brand {
                    font-size: clamp(4rem, 18vw, 16rem);
                    font-weight: 600;
                    text-align: center;
                    line-height: 1;
                }
                .footer-tagline, .footer-description {
                    text-align: center;
                    color: #555;
                }
                .footer-social {
                    list-style: none;
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 0;
                    margin: 2rem 0;
                }
                .footer-social a, .footer-legal a {
                    color: #1E1E1E;
                    text-decoration: none;
                }
                .footer-social a:hover, .footer-legal a:hover {
                    color: #1E90FF;
                }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    border-top: 1px solid #ddd;
                    padding-top: 2rem;
                    font-size: 0.9rem;
                    color: #777;
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                "#}
            </style>
        </footer>
    }
}
