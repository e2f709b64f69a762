//! Reveal Wrapper
//!
//! One-way scroll reveal: the wrapper starts in its base class and gains the
//! visible class the first time it crosses the intersection threshold.
//! Staggered groups pass an index, which becomes an index-proportional
//! transition delay.

use leptos::html::Div;
use leptos::prelude::*;

use crate::scroll::{stagger_delay_ms, use_reveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(default = "animated")] visible_class: &'static str,
    #[prop(default = REVEAL_THRESHOLD)] threshold: f64,
    /// Fixed delay before the transition starts.
    #[prop(optional)]
    delay_ms: u32,
    /// Position within a staggered group; adds 100ms per index.
    #[prop(optional)]
    stagger_index: Option<usize>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, threshold, Some(REVEAL_ROOT_MARGIN));

    let delay = total_delay_ms(delay_ms, stagger_index);
    let class_attr = move || {
        if revealed.get() {
            format!("{class} {visible_class}")
        } else {
            class.clone()
        }
    };
    let delay_style = move || {
        if delay > 0 {
            format!("{delay}ms")
        } else {
            String::new()
        }
    };

    view! {
        <div
            node_ref=node_ref
            class=class_attr
            data-animate=""
            style:transition-delay=delay_style
        >
            {children()}
        </div>
    }
}

/// Fixed delay plus the index-proportional stagger, when any.
fn total_delay_ms(delay_ms: u32, stagger_index: Option<usize>) -> u32 {
    delay_ms + stagger_index.map(stagger_delay_ms).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_delay_combines_fixed_and_stagger() {
        assert_eq!(total_delay_ms(0, None), 0);
        assert_eq!(total_delay_ms(200, None), 200);
        assert_eq!(total_delay_ms(0, Some(3)), 300);
        assert_eq!(total_delay_ms(200, Some(2)), 400);
    }
}
