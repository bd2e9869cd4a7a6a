use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::api::{self, models::MetricBox};
use crate::content;
use crate::fetch::{use_cached, CacheKey};
use crate::motion::counter::{
    counter_value, format_metric, parse_metric, COUNTER_DURATION_MS, COUNTER_FRAME_MS,
};

use super::viewport::use_in_view_once;

/// Milliseconds of count-up animation played so far. Starts ticking once
/// `active` turns true and stops at [`COUNTER_DURATION_MS`].
#[hook]
pub fn use_count_up(active: bool) -> f64 {
    let elapsed = use_state(|| 0.0f64);

    {
        let handle = elapsed.clone();
        use_effect_with_deps(
            move |(active, elapsed_ms): &(bool, f64)| {
                let next = *elapsed_ms + f64::from(COUNTER_FRAME_MS);
                let timeout = (*active && *elapsed_ms < COUNTER_DURATION_MS)
                    .then(|| Timeout::new(COUNTER_FRAME_MS, move || handle.set(next)));
                move || drop(timeout)
            },
            (active, *elapsed),
        );
    }

    *elapsed
}

#[derive(Properties, PartialEq)]
struct MetricCardProps {
    metric: MetricBox,
}

#[function_component(MetricCard)]
fn metric_card(props: &MetricCardProps) -> Html {
    let metric = &props.metric;
    let card_ref = use_node_ref();
    let in_view = use_in_view_once(card_ref.clone(), 0.3);
    let elapsed = use_count_up(in_view);

    let value = counter_value(parse_metric(&metric.value), elapsed, COUNTER_DURATION_MS);
    let accent = if metric.color.is_empty() { "#1E90FF" } else { metric.color.as_str() };

    html! {
        <div
            ref={card_ref}
            class={classes!("metric-card", in_view.then(|| "visible"))}
            style={format!("border-color: {};", accent)}
        >
            <div class="metric-value" style={format!("color: {};", accent)}>
                {format_metric(value, &metric.suffix)}
                <span class="metric-suffix">{&metric.suffix}</span>
            </div>
            <div class="metric-label">{&metric.label}</div>
            <p class="metric-description">{&metric.description}</p>
        </div>
    }
}

#[function_component(Metrics)]
pub fn metrics() -> Html {
    let state = use_cached(CacheKey::MetricBoxes, api::metric_boxes);
    let mut metrics = content::or_fallback(state.data.as_deref(), content::fallback_metrics);
    metrics.sort_by_key(|m| m.order);

    html! {
        <section id="analytics" class="metrics-section">
            <div class="metrics-grid">
                { for metrics.into_iter().map(|metric| html! { <MetricCard key={metric.id} metric={metric.clone()} /> }) }
            </div>
            <style>
                {r#"
                .metrics-section {
                    padding: 120px 24px;
                    background: #0b0b14;
                }
                .metrics-grid {
                    max-width: 1300px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .metric-card {
                    padding: 36px 44px;
                    min-height: 300px;
                    border-radius: 24px;
                    border: 1px solid;
                    background: rgba(255, 255, 255, 0.04);
                    backdrop-filter: blur(12px);
                    color: #fff;
                    opacity: 0;
                    transform: translateY(20px) scale(0.8);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .metric-card.visible {
                    opacity: 1;
                    transform: none;
                }
                .metric-value {
                    font-size: 4.5rem;
                    font-weight: 600;
                }
                .metric-suffix {
                    font-size: 2.5rem;
                    margin-left: 0.2rem;
                }
                .metric-label {
                    font-size: 1.1rem;
                    font-weight: 500;
                    margin: 1rem 0 0.5rem;
                }
                .metric-description {
                    color: #aaa;
                    line-height: 1.5;
                }
                "#}
            </style>
        </section>
    }
}
