use yew::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::{use_cached, CacheKey};

use super::cta_modal::{cta_button, use_cta_modal};
use super::viewport::use_in_view_once;

/// Layout slot for a floating benefit pill. Unknown slots sit in the middle.
pub fn slot_class(position: &str) -> &'static str {
    match position {
        "top-center" => "slot-top-center",
        "top-left" => "slot-top-left",
        "top-right" => "slot-top-right",
        "middle-left" => "slot-middle-left",
        "middle-right" => "slot-middle-right",
        "bottom-left" => "slot-bottom-left",
        "bottom-right" => "slot-bottom-right",
        "bottom-center" => "slot-bottom-center",
        _ => "slot-center",
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "cloud" => "☁",
        "shield" => "🛡",
        "dashboard" => "▦",
        "chart" => "📈",
        _ => "✦",
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let state = use_cached(CacheKey::BenefitsSection, api::benefits_section);
    let modal = use_cta_modal();
    let section_ref = use_node_ref();
    let in_view = use_in_view_once(section_ref.clone(), 0.3);

    let fallback = content::fallback_benefits_section();
    let section = state.data.as_deref().unwrap_or(&fallback);
    if !section.is_visible {
        return html! {};
    }
    let pills = content::visible_benefits(&content::or_fallback(Some(&section.benefits), || {
        content::fallback_benefits_section().benefits
    }));
    let background = content::text_or(
        &section.background_color,
        "radial-gradient(circle at center, #2ECC71 0%, #e8f8ed 100%, #f8fdf9 100%)",
    );

    html! {
        <section
            id="benefits"
            ref={section_ref}
            class={classes!("benefits", in_view.then(|| "in-view"))}
            style={format!("background: {};", background)}
        >
            <div class="benefits-stage">
                { for pills.iter().enumerate().map(|(index, benefit)| html! {
                    <div
                        key={benefit.id}
                        class={classes!("benefit-pill", slot_class(&benefit.position))}
                        style={format!("animation-delay: {:.1}s, {:.1}s;", index as f64 * 0.1, index as f64 * 0.3 + 1.0)}
                    >
                        <span class="benefit-icon">{icon_glyph(&benefit.icon)}</span>
                        <span>{&benefit.title}</span>
                    </div>
                }) }
                <div class="benefits-copy">
                    <span class="benefits-badge">{content::text_or(&section.badge_text, "BENEFITS")}</span>
                    <h2>
                        {&section.title}
                        <br />
                        <strong>{&section.subtitle}</strong>
                    </h2>
                    <p>{&section.description}</p>
                    <div class="benefits-cta">
                        { cta_button(&section.cta_primary_url, &content::text_or(&section.cta_primary_text, "Get Started"), "benefits-cta-primary", &modal) }
                        { cta_button(&section.cta_secondary_url, &content::text_or(&section.cta_secondary_text, "Learn More"), "benefits-cta-secondary", &modal) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .benefits {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    padding: 5rem 1.5rem;
                }
                .benefits-stage {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .benefits-copy {
                    max-width: 36rem;
                    text-align: center;
                    z-index: 5;
                }
                .benefits-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.6);
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                }
                .benefits-copy h2 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 300;
                    line-height: 1.1;
                }
                .benefits-cta {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-top: 2rem;
                }
                .benefits-cta-primary, .benefits-cta-secondary {
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    text-decoration: none;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .benefits-cta-primary {
                    background: #000;
                    color: #fff;
                    border: none;
                }
                .benefits-cta-secondary {
                    background: transparent;
                    color: #000;
                    border: 1px solid #000;
                }
                .benefit-pill {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    height: 4rem;
                    padding: 0 2rem;
                    min-width: 180px;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.8);
                    color: #fff;
                    opacity: 0;
                    transform: scale(0.8);
                }
                .benefits.in-view .benefit-pill {
                    animation: benefit-in 0.5s ease-out forwards, benefit-float 3.5s ease-in-out infinite;
                }
                .benefit-icon {
                    font-size: 1.25rem;
                }
                .slot-top-center { top: 2.5rem; left: 50%; margin-left: -90px; }
                .slot-top-left { top: 10rem; left: 8rem; }
                .slot-top-right { top: 10rem; right: 8rem; }
                .slot-middle-left { top: 50%; left: 5rem; }
                .slot-middle-right { top: 50%; right: 5rem; }
                .slot-bottom-left { bottom: 10rem; left: 8rem; }
                .slot-bottom-right { bottom: 10rem; right: 8rem; }
                .slot-bottom-center { bottom: 2.5rem; left: 50%; margin-left: -90px; }
                .slot-center { top: 50%; left: 50%; }
                @keyframes benefit-in {
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes benefit-float {
                    0%, 100% { translate: 0 0; }
                    50% { translate: 0 -12px; }
                }
                @media (max-width: 768px) {
                    .benefits-stage {
                        flex-direction: column;
                    }
                    .benefit-pill {
                        position: static;
                        margin: 0.5rem auto;
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
    fn every_known_position_has_its_own_slot() {
        let positions = [
            "top-center", "top-left", "top-right", "middle-left",
            "middle-right", "bottom-left", "bottom-right", "bottom-center",
        ];
        let mut slots: Vec<&str> = positions.iter().map(|p| slot_class(p)).collect();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), positions.len());
        assert!(!slots.contains(&"slot-center"));
    }

    #[test]
    fn unknown_position_is_centered() {
        assert_eq!(slot_class("somewhere"), "slot-center");
        assert_eq!(slot_class(""), "slot-center");
    }
}
