use yew::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::{use_cached, CacheKey};

use super::cta_modal::{cta_button, use_cta_modal};

fn pick<'a>(fetched: Option<&'a str>, fallback: &'a str) -> &'a str {
    fetched.filter(|text| !text.trim().is_empty()).unwrap_or(fallback)
}

/// CSS `url(..)` for a backend image link. Links that could close the
/// quoted string or the function call are dropped.
pub fn css_url(src: &str) -> Option<String> {
    let src = src.trim();
    let breaks_out = |c: char| matches!(c, '\'' | '"' | '(' | ')' | '\\' | ';') || c.is_control();
    if src.is_empty() || src.contains(breaks_out) {
        return None;
    }
    Some(format!("url('{}')", src))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let state = use_cached(CacheKey::HeroSection, api::hero_section);
    let modal = use_cta_modal();
    let hero = state.data.as_deref();
    if hero.map_or(false, |h| !h.is_visible) {
        return html! {};
    }

    let tagline = if state.loading && hero.is_none() {
        "Loading..."
    } else {
        pick(hero.map(|h| h.tagline.as_str()), content::HERO_TAGLINE)
    };
    let title = pick(hero.map(|h| h.title.as_str()), content::HERO_TITLE);
    let description = pick(hero.map(|h| h.description.as_str()), content::HERO_DESCRIPTION);
    let primary = pick(hero.map(|h| h.cta_primary_text.as_str()), content::HERO_PRIMARY_CTA);
    let secondary = pick(hero.map(|h| h.cta_secondary_text.as_str()), content::HERO_SECONDARY_CTA);
    let primary_url = hero.map_or("", |h| h.cta_primary_url.as_str());
    let secondary_url = hero.map_or("", |h| h.cta_secondary_url.as_str());

    let mut style = String::new();
    if let Some(hero) = hero {
        if !hero.background_color.is_empty() {
            style.push_str(&format!("background-color: {};", hero.background_color));
        }
        if !hero.text_color.is_empty() {
            style.push_str(&format!("color: {};", hero.text_color));
        }
        if let Some(src) = hero.background_image.as_deref().filter(|src| !src.trim().is_empty()) {
            match css_url(src) {
                Some(image) => style.push_str(&format!("background-image: {};", image)),
                None => log::warn!("ignoring unsafe hero background image link"),
            }
        }
    }

    html! {
        <section id="about-us" class="hero" {style}>
            <span class="hero-tagline">{tagline}</span>
            <h1 class="hero-title">{title}</h1>
            <p class="hero-description">{description}</p>
            <div class="hero-cta-row">
                { cta_button(primary_url, primary, "hero-cta-primary", &modal) }
                { cta_button(secondary_url, secondary, "hero-cta-secondary", &modal) }
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 120px 24px 80px;
                    background-size: cover;
                    background-position: center;
                }
                .hero-tagline {
                    font-size: 1.1rem;
                    font-weight: 300;
                    min-width: 290px;
                }
                .hero-title {
                    font-size: clamp(3rem, 14vw, 12rem);
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    margin: 0 0 2rem;
                    color: #0b1b3f;
                }
                .hero-description {
                    max-width: 48rem;
                    font-size: 1.4rem;
                    line-height: 1.6;
                    color: #4a4a4a;
                    margin-bottom: 3rem;
                }
                .hero-cta-row {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .hero-cta-primary, .hero-cta-secondary {
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 500;
                    transition: transform 0.2s ease;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .hero-cta-primary {
                    background: #1E90FF;
                    color: #fff;
                }
                .hero-cta-secondary {
                    border: 1px solid #1E90FF;
                    color: #1E90FF;
                }
                .hero-cta-primary:hover, .hero-cta-secondary:hover {
                    transform: translateY(-2px);
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
    fn plain_image_links_become_css_urls() {
        assert_eq!(
            css_url(" https://cdn.floneo.co/hero.png "),
            Some("url('https://cdn.floneo.co/hero.png')".to_string())
        );
        assert_eq!(css_url(""), None);
    }

    #[test]
    fn links_that_escape_the_url_are_dropped() {
        assert_eq!(css_url("https://x/a.png'); background: red; ('"), None);
        assert_eq!(css_url("https://x/a.png)"), None);
        assert_eq!(css_url("https://x/a\nb.png"), None);
    }
}
