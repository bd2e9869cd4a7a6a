use yew::prelude::*;

use crate::api;
use crate::content;
use crate::fetch::{use_cached, CacheKey};
use crate::motion::counter::{counter_value, parse_metric, COUNTER_DURATION_MS};

use super::metrics::use_count_up;
use super::viewport::use_in_view_once;

/// Copies of the country list laid end to end so the marquee loops without a gap.
const MARQUEE_COPIES: usize = 3;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let state = use_cached(CacheKey::WhyChooseUsSection, api::why_choose_us_section);
    let countries = use_cached(CacheKey::CountryData, api::country_data);
    let section_ref = use_node_ref();
    let in_view = use_in_view_once(section_ref.clone(), 0.2);
    let elapsed = use_count_up(in_view);

    let fallback = content::fallback_why_choose_us();
    let section = state.data.as_deref().unwrap_or(&fallback);
    if !section.is_visible {
        return html! {};
    }
    let countries = content::visible_countries(&content::or_fallback(
        countries.data.as_deref(),
        content::fallback_countries,
    ));
    let reach = counter_value(content::GLOBAL_REACH_COUNTRIES, elapsed, COUNTER_DURATION_MS);

    html! {
        <section ref={section_ref} class={classes!("why-choose-us", in_view.then(|| "in-view"))}>
            <span class="why-badge">{&section.badge_text}</span>
            <h2 class="why-title">{&section.title}</h2>
            <p class="why-subtitle">{&section.subtitle}</p>

            <div class="why-stats">
                { for section.stats().into_iter().filter(|(value, _)| !value.is_empty()).map(|(value, label)| {
                    let shown = counter_value(parse_metric(value), elapsed, COUNTER_DURATION_MS);
                    html! {
                        <div class="why-stat">
                            <div class="why-stat-value">{format!("{}%", shown.round())}</div>
                            <div class="why-stat-label">{label.to_string()}</div>
                        </div>
                    }
                }) }
            </div>

            <div class="why-global">
                <div class="why-global-count">{format!("{}+", reach.round())}</div>
                <h3>{&section.global_title}</h3>
                <p>{&section.global_description}</p>
                <div class="why-marquee">
                    <div class="why-marquee-track">
                        { for (0..MARQUEE_COPIES).flat_map(|copy| countries.iter().map(move |country| (copy, country))).map(|(copy, country)| html! {
                            <span key={format!("{}-{}", copy, country.id)} class="why-country" title={country.name.clone()}>
                                <span class="why-flag">{&country.flag_emoji}</span>
                                {&country.name}
                            </span>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .why-choose-us {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                    overflow: hidden;
                }
                .why-badge {
                    font-size: 0.8rem;
                    letter-spacing: 0.15em;
                    color: #1E90FF;
                }
                .why-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 300;
                    margin: 1rem 0;
                }
                .why-subtitle {
                    color: #555;
                    font-size: 1.2rem;
                }
                .why-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 2rem;
                    margin: 4rem 0;
                }
                .why-stat-value {
                    font-size: 3.5rem;
                    font-weight: 600;
                    color: #0b1b3f;
                }
                .why-stat-label {
                    color: #777;
                    text-transform: capitalize;
                }
                .why-global {
                    background: #0f0f1e;
                    color: #fff;
                    border-radius: 32px;
                    padding: 3rem 2rem;
                }
                .why-global-count {
                    font-size: 4rem;
                    font-weight: 600;
                }
                .why-marquee {
                    overflow: hidden;
                    margin-top: 2rem;
                }
                .why-marquee-track {
                    display: flex;
                    gap: 2rem;
                    width: max-content;
                    animation: why-scroll 30s linear infinite;
                }
                .why-country {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    white-space: nowrap;
                    color: #ccc;
                }
                .why-flag {
                    font-size: 1.5rem;
                }
                @keyframes why-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.333%); }
                }
                "#}
            </style>
        </section>
    }
}
