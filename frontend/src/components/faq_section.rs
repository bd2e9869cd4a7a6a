use web_sys::MouseEvent;
use yew::prelude::*;

use crate::api::{self, models::FaqItem};
use crate::content;
use crate::fetch::{use_cached, CacheKey};

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    item: FaqItem,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.item.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.item.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let section = use_cached(CacheKey::FaqSection, api::faq_section);
    let items = use_cached(CacheKey::FaqItems, api::faq_items);

    let copy = section
        .data
        .as_deref()
        .cloned()
        .unwrap_or_else(content::fallback_faq_section);
    if !copy.is_visible {
        return html! {};
    }
    let items = content::visible_faq_items(&content::or_fallback(
        items.data.as_deref(),
        content::fallback_faq_items,
    ));

    html! {
        <section id="help" class="faq-section">
            <div class="faq-header">
                <span class="faq-eyebrow">{&copy.subtitle}</span>
                <h2>{&copy.title}</h2>
                <p>{&copy.description}</p>
            </div>
            <div class="faq-list">
                { for items.into_iter().map(|item| html! { <FaqEntry key={item.id} item={item.clone()} /> }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 100px 24px;
                }
                .faq-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .faq-eyebrow {
                    color: #666;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .faq-header h2 {
                    font-size: 3rem;
                    color: #1E1E1E;
                    margin: 1rem 0 1.5rem;
                }
                .faq-header p {
                    color: #666;
                    max-width: 500px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .faq-item {
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    cursor: pointer;
                    text-align: left;
                    font-size: 1.1rem;
                    color: #1E1E1E;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #1E90FF;
                    margin-left: 1rem;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: all 0.3s ease;
                    color: #555;
                    line-height: 1.6;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
