//! "All in One Place" section: service cards that stack on top of each other
//! as the wheel drives a [`ScrollSequencer`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent};
use yew::prelude::*;

use crate::api::{self, models::ServiceCard};
use crate::config;
use crate::content;
use crate::fetch::use_client_fetch;
use crate::motion::interpolate::{interpolate, HEADING_OPACITY};
use crate::motion::{document_lock, CardFrame, ScrollSequencer};

use super::viewport::section_bounds;

#[derive(Properties, PartialEq)]
struct StackingCardProps {
    card: ServiceCard,
    index: usize,
    frame: CardFrame,
}

#[function_component(StackingCard)]
fn stacking_card(props: &StackingCardProps) -> Html {
    let StackingCardProps { card, index, frame } = props;
    let accent = if card.color.is_empty() { "#1E90FF" } else { card.color.as_str() };

    html! {
        <div class="stacking-card-wrapper" style={frame.wrapper_style(*index)}>
            <div class="stacking-card" style={frame.body_style()}>
                <div class="stacking-card-text">
                    <span class="stacking-card-index" style={format!("color: {};", accent)}>
                        {format!("{:02}", index + 1)}
                    </span>
                    <h3>{&card.title}</h3>
                    <p>{&card.description}</p>
                </div>
                {
                    if let Some(src) = card.picture() {
                        html! { <img class="stacking-card-image" src={src.to_string()} alt={card.title.clone()} loading="lazy" /> }
                    } else {
                        html! { <div class="stacking-card-image" style={format!("background: {};", accent)}></div> }
                    }
                }
            </div>
        </div>
    }
}

#[function_component(ServicesScroll)]
pub fn services_scroll() -> Html {
    let state = use_client_fetch((), api::service_cards);
    let cards = Rc::new(content::or_fallback(state.data.as_ref(), content::fallback_service_cards));
    let section_ref = use_node_ref();
    let progress = use_state(|| 0.0f64);

    {
        let section_ref = section_ref.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |count: &usize| {
                let sequencer = Rc::new(RefCell::new(ScrollSequencer::new(
                    *count,
                    config::SCROLL_BUDGET_PER_CARD,
                    document_lock(),
                )));
                progress.set(sequencer.borrow().progress());

                let on_wheel = {
                    let sequencer = sequencer.clone();
                    let section_ref = section_ref.clone();
                    let progress = progress.clone();
                    Closure::wrap(Box::new(move |event: WheelEvent| {
                        let Some(bounds) = section_bounds(&section_ref) else {
                            return;
                        };
                        let mut sequencer = sequencer.borrow_mut();
                        if sequencer.on_wheel(event.delta_y(), bounds).should_prevent_default() {
                            event.prevent_default();
                        }
                        progress.set(sequencer.progress());
                    }) as Box<dyn FnMut(WheelEvent)>)
                };

                let on_scroll = {
                    let sequencer = sequencer.clone();
                    let progress = progress.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(bounds) = section_bounds(&section_ref) {
                            let mut sequencer = sequencer.borrow_mut();
                            sequencer.on_scroll(bounds);
                            progress.set(sequencer.progress());
                        }
                    }) as Box<dyn FnMut()>)
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    let mut options = AddEventListenerOptions::new();
                    options.passive(false);
                    if window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "wheel",
                            on_wheel.as_ref().unchecked_ref(),
                            &options,
                        )
                        .is_err()
                    {
                        log::warn!("could not attach wheel listener for services section");
                    }
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "wheel",
                            on_wheel.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    // Releases the page lock if it is still held.
                    sequencer.borrow_mut().reset();
                }
            },
            cards.len(),
        );
    }

    let frames: Vec<CardFrame> = (0..cards.len())
        .map(|index| CardFrame::at(*progress, index, cards.len()))
        .collect();
    let heading_style = format!(
        "opacity: {:.3};",
        interpolate(*progress, &HEADING_OPACITY)
    );

    html! {
        <section id="services" class="services-scroll" ref={section_ref}>
            <div class="services-sticky">
                <div class="services-heading" style={heading_style}>
                    <h2>{"All in One Place"}</h2>
                    <p>{"Discover how we help you build, automate, and scale your ideas"}</p>
                </div>
                <div class="services-stack">
                    {
                        cards.iter().zip(frames).enumerate().map(|(index, (card, frame))| html! {
                            <StackingCard key={card.id} card={card.clone()} {index} {frame} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .services-scroll {
                    position: relative;
                    background-color: #0f0f1e;
                    min-height: 130vh;
                }
                .services-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .services-heading {
                    position: absolute;
                    top: 80px;
                    left: 0;
                    right: 0;
                    text-align: center;
                    z-index: 50;
                    color: #fff;
                }
                .services-heading h2 {
                    font-size: 3rem;
                    font-weight: 300;
                    margin-bottom: 1rem;
                }
                .services-heading p {
                    color: #999;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .services-stack {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }
                .stacking-card-wrapper {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    will-change: transform, opacity;
                }
                .stacking-card {
                    width: min(1100px, 90vw);
                    height: 500px;
                    display: flex;
                    gap: 2rem;
                    border-radius: 24px;
                    overflow: hidden;
                    background: #1a1a2e;
                    color: #fff;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                }
                .stacking-card-text {
                    flex: 1;
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .stacking-card-index {
                    font-size: 1rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                }
                .stacking-card-text h3 {
                    font-size: 2.2rem;
                    margin: 1rem 0;
                }
                .stacking-card-text p {
                    color: #bbb;
                    line-height: 1.6;
                }
                .stacking-card-image {
                    flex: 1;
                    object-fit: cover;
                    min-width: 0;
                }
                @media (max-width: 768px) {
                    .stacking-card {
                        flex-direction: column;
                        height: 70vh;
                    }
                    .stacking-card-text {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
