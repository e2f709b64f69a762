//! Scroll Effects
//!
//! IntersectionObserver glue for one-way reveals, the `use_reveal` hook, and
//! the hero parallax binding. A reveal fires once: the observer disconnects
//! itself after the first intersection, so scrolling back never re-triggers.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visibility fraction for section / card reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visibility fraction before a stat counter starts counting.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Pulls the reveal line 50px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Per-card delay step in staggered grids.
pub const STAGGER_STEP_MS: u32 = 100;

/// Index-proportional delay for the nth card of a staggered group.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Observe `el` and run `on_visible` exactly once when it crosses the
/// threshold, then tear the observer down.
pub fn observe_once(
    el: &Element,
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: impl FnOnce() + 'static,
) {
    let mut pending = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    if let Some(f) = pending.take() {
                        f();
                    }
                    observer.disconnect();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(el);
            // One-shot: the observer keeps the closure alive until disconnect
            callback.forget();
        }
        Err(e) => {
            web_sys::console::error_1(
                &format!("[SCROLL] IntersectionObserver unavailable: {e:?}").into(),
            );
        }
    }
}

/// Reveal signal for the element behind `node_ref`: starts false, flips to
/// true once on first intersection.
pub fn use_reveal(
    node_ref: NodeRef<Div>,
    threshold: f64,
    root_margin: Option<&'static str>,
) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let observing = StoredValue::new(false);
    Effect::new(move |_| {
        if observing.get_value() {
            return;
        }
        if let Some(el) = node_ref.get() {
            observing.set_value(true);
            observe_once(&el, threshold, root_margin, move || set_revealed.set(true));
        }
    });
    revealed
}

/// Translate the element vertically by `scroll_y * factor` while the page
/// scroll is under `max_scroll`. Listener stays bound for the page lifetime.
pub fn bind_parallax(node_ref: NodeRef<Div>, factor: f64, max_scroll: f64) {
    let bound = StoredValue::new(false);
    Effect::new(move |_| {
        if bound.get_value() {
            return;
        }
        let Some(el) = node_ref.get() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        bound.set_value(true);
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let scrolled = web_sys::window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            if scrolled < max_scroll {
                let _ = web_sys::HtmlElement::style(&el)
                    .set_property("transform", &format!("translateY({}px)", scrolled * factor));
            }
        });
        let _ =
            window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_index_proportional() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(7), 700);
    }
}
