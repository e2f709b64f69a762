//! Stat Counter Component
//!
//! Hero stat that counts up from 0 to its target once it scrolls into view
//! (half visible), over 50 ticks at 30ms. The non-numeric suffix of the
//! label ("+", "%") is preserved on every tick and in the final text.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::counter::{counter_value, parse_counter, COUNTER_TICKS, COUNTER_TICK_MS};
use crate::scroll::{use_reveal, COUNTER_THRESHOLD};

#[component]
pub fn StatCounter(
    /// Final label, e.g. "250+" or "98%".
    target: String,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, COUNTER_THRESHOLD, None);
    let (text, set_text) = signal(target.clone());
    let parsed = parse_counter(&target);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !revealed.get() || started.get_value() {
            return;
        }
        started.set_value(true);
        // Non-numeric labels just stay as they are
        let Some((target_value, suffix)) = parsed.clone() else {
            return;
        };
        spawn_local(async move {
            for tick in 1..=COUNTER_TICKS {
                TimeoutFuture::new(COUNTER_TICK_MS).await;
                set_text.set(format!("{}{}", counter_value(target_value, tick), suffix));
            }
        });
    });

    view! {
        <div class="hero__stat-number" node_ref=node_ref>
            {move || text.get()}
        </div>
    }
}
