//! "Reserve your spot" modal opened by the sales call-to-action buttons.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::{document_lock, ScrollLock, ScrollLockGuard};
use crate::Route;

/// Handle shared with every component that can open the modal.
#[derive(Clone, PartialEq, Default)]
pub struct CtaModal {
    pub open: Callback<()>,
    pub close: Callback<()>,
    pub is_open: bool,
}

/// Where a call-to-action button leads.
#[derive(Clone, Debug, PartialEq)]
pub enum CtaAction {
    Route(Route),
    Href(String),
    Modal,
}

impl CtaAction {
    /// Blank and placeholder URLs open the modal; app paths go through the
    /// router; anything else is a plain link.
    pub fn for_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() || url == "#" {
            return CtaAction::Modal;
        }
        match Route::internal(url) {
            Some(route) => CtaAction::Route(route),
            None => CtaAction::Href(url.to_string()),
        }
    }
}

/// Renders one call-to-action as a router link, an anchor or a modal button.
pub fn cta_button(url: &str, label: &str, class: &'static str, modal: &CtaModal) -> Html {
    match CtaAction::for_url(url) {
        CtaAction::Route(route) => html! {
            <Link<Route> to={route} classes={class}>{label.to_string()}</Link<Route>>
        },
        CtaAction::Href(href) => html! {
            <a {href} {class}>{label.to_string()}</a>
        },
        CtaAction::Modal => {
            let open = modal.open.clone();
            html! {
                <button {class} onclick={Callback::from(move |_: MouseEvent| open.emit(()))}>
                    {label.to_string()}
                </button>
            }
        }
    }
}

/// Holds the page scroll lock only while the modal is open. The guard
/// shares the lock with the services sequencer, so releasing it never
/// unlocks a page the sequencer still holds.
pub fn modal_scroll_guard(is_open: bool, lock: &Rc<ScrollLock>) -> Option<ScrollLockGuard> {
    is_open.then(|| lock.acquire())
}

#[hook]
pub fn use_cta_modal() -> CtaModal {
    use_context::<CtaModal>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct CtaModalProviderProps {
    pub children: Children,
}

#[function_component(CtaModalProvider)]
pub fn cta_modal_provider(props: &CtaModalProviderProps) -> Html {
    let is_open = use_state(|| false);
    let modal = CtaModal {
        open: {
            let is_open = is_open.clone();
            Callback::from(move |_| is_open.set(true))
        },
        close: {
            let is_open = is_open.clone();
            Callback::from(move |_| is_open.set(false))
        },
        is_open: *is_open,
    };

    html! {
        <ContextProvider<CtaModal> context={modal.clone()}>
            { for props.children.iter() }
            <CtaModalDialog is_open={modal.is_open} on_close={modal.close.clone()} />
        </ContextProvider<CtaModal>>
    }
}

#[derive(Properties, PartialEq)]
struct CtaModalDialogProps {
    is_open: bool,
    on_close: Callback<()>,
}

#[function_component(CtaModalDialog)]
fn cta_modal_dialog(props: &CtaModalDialogProps) -> Html {
    let navigator = use_navigator();

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let guard = modal_scroll_guard(*is_open, &document_lock());
                let document = web_sys::window().and_then(|w| w.document());

                let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if *is_open {
                    if let Some(document) = &document {
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                    drop(guard);
                }
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let reserve = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
            on_close.emit(());
        })
    };

    html! {
        <div class="cta-backdrop" onclick={close.clone()}>
            <div class="cta-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="cta-close" aria-label="Close modal" onclick={close.clone()}>{"×"}</button>
                <div class="cta-logo">{"floneo"}</div>
                <h2>{"Exciting News!"}</h2>
                <p>
                    {"floneo will be ready for demo on "}
                    <span class="cta-date">{"November 30th"}</span>
                    {"."}
                    <br />
                    {"Reserve your spot today!"}
                </p>
                <div class="cta-actions">
                    <button class="cta-reserve" onclick={reserve}>{"Reserve My Spot"}</button>
                    <button class="cta-later" onclick={close}>{"Maybe Later"}</button>
                </div>
            </div>
            <style>
                {r#"
                .cta-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: cta-fade 0.2s ease-out;
                }
                .cta-modal {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: #fff;
                    border-radius: 24px;
                    padding: 2.5rem 2rem 2rem;
                    text-align: center;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                }
                .cta-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                    color: #666;
                }
                .cta-logo {
                    display: inline-block;
                    background: #1A2332;
                    color: #fff;
                    border-radius: 16px;
                    padding: 0.75rem 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .cta-date {
                    color: #1E90FF;
                    font-weight: 600;
                }
                .cta-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .cta-reserve, .cta-later {
                    padding: 0.9rem;
                    border-radius: 999px;
                    font-weight: 500;
                    cursor: pointer;
                }
                .cta-reserve {
                    background: #1E90FF;
                    color: #fff;
                    border: none;
                }
                .cta-later {
                    background: transparent;
                    border: 1px solid #ccc;
                    color: #333;
                }
                @keyframes cta-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
