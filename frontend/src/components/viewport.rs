use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::SectionBounds;

/// Live viewport-relative bounds of the element behind `node`.
pub fn section_bounds(node: &NodeRef) -> Option<SectionBounds> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
        viewport_height,
    })
}

/// Becomes true the first time at least `threshold` of the element has been
/// on screen, and stays true.
#[hook]
pub fn use_in_view_once(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let mut fired = false;
                let mut check = move || {
                    if fired {
                        return;
                    }
                    if let Some(bounds) = section_bounds(&node) {
                        if bounds.element_fraction() >= threshold {
                            fired = true;
                            seen.set(true);
                        }
                    }
                };
                check();

                let window = web_sys::window();
                let listener = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *seen
}
