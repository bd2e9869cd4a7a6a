use yew::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::{use_cached, CacheKey};

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("About Us", "/#about-us"),
    ("Services", "/#services"),
    ("Blog", "/blogs"),
    ("Contact", "/contact"),
];

const FEATURES: [&str; 4] = [
    "Low-Code Development",
    "No-Code Automation",
    "Workflow Management",
    "Real-time Analytics",
];

/// Short badge text for a platform tile, e.g. `in` for LinkedIn.
pub fn platform_badge(platform: &str) -> String {
    match platform.trim().to_lowercase().as_str() {
        "linkedin" => "in".to_string(),
        "twitter" | "x" => "X".to_string(),
        other => other.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default(),
    }
}

#[function_component(SocialSection)]
pub fn social_section() -> Html {
    let section = use_cached(CacheKey::SocialSection, api::social_media_section);
    let links = use_cached(CacheKey::SocialLinks, api::social_links);

    let fallback = content::fallback_social_section();
    let section = section.data.as_deref().unwrap_or(&fallback);
    if !section.is_visible {
        return html! {};
    }
    let links = content::visible_social_links(&content::or_fallback(
        links.data.as_deref(),
        content::fallback_social_links,
    ));
    let style = if section.background_color.is_empty() {
        String::new()
    } else {
        format!("background: {};", section.background_color)
    };

    html! {
        <section class="social-section" {style}>
            <div class="social-heading">
                <h2>{&section.title}</h2>
                <p>{&section.subtitle}</p>
            </div>
            <div class="social-grid">
                <div class="social-icons">
                    { for links.iter().map(|link| {
                        let name = if link.platform_name.is_empty() { &link.platform } else { &link.platform_name };
                        html! {
                            <a key={link.id} class="social-icon" href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                                <span class="social-badge">{platform_badge(&link.platform)}</span>
                                <span class="social-label">{name}</span>
                            </a>
                        }
                    }) }
                </div>
                <div class="social-columns">
                    <div>
                        <h3>{"Company"}</h3>
                        { for COMPANY_LINKS.iter().map(|(label, href)| html! {
                            <a class="social-link" href={*href}>{*label}</a>
                        }) }
                    </div>
                    <div>
                        <h3>{"Features"}</h3>
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="social-feature">{*feature}</div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .social-section {
                    background: #fff;
                    padding: 5rem 1.5rem;
                }
                .social-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .social-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .social-icons {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 28rem;
                }
                .social-icon {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #666;
                    text-decoration: none;
                    transition: transform 0.2s ease, color 0.2s ease;
                }
                .social-icon:hover {
                    color: #FFC108;
                    transform: translateY(-5px);
                }
                .social-badge {
                    width: 3rem;
                    height: 3rem;
                    border: 1px solid #ccc;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                }
                .social-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .social-link, .social-feature {
                    display: block;
                    color: #FF4FCB;
                    font-size: 1.1rem;
                    margin-bottom: 1.25rem;
                    text-decoration: none;
                }
                .social-feature {
                    font-weight: 300;
                }
                @media (max-width: 768px) {
                    .social-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_follow_platform_names() {
        assert_eq!(platform_badge("LinkedIn"), "in");
        assert_eq!(platform_badge("twitter"), "X");
        assert_eq!(platform_badge("discord"), "D");
        assert_eq!(platform_badge("  "), "");
    }
}
