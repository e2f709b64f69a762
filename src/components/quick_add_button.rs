//! Quick Add Button
//!
//! One-click add-to-cart with inline feedback: Idle → Loading (spinner) →
//! "✓ Added" or "Error" for 1.5s → Idle. Disabled while not idle, so a
//! gesture can't stack requests. Also used on the product detail page with
//! an external quantity signal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_cart;

/// How long the "✓ Added" / "Error" feedback shows before reset.
const FEEDBACK_MS: u32 = 1500;

#[derive(Clone, Copy, PartialEq)]
enum AddState {
    Idle,
    Loading,
    Added,
    Failed,
}

#[component]
pub fn QuickAddButton(
    variant_id: u64,
    /// Quantity to add; defaults to 1 when no selector is wired up.
    #[prop(optional, into)]
    quantity: Option<Signal<u32>>,
    #[prop(default = "Add to Cart")] label: &'static str,
) -> impl IntoView {
    let cart = use_cart();
    let (state, set_state) = signal(AddState::Idle);

    let on_click = move |_| {
        if state.get_untracked() != AddState::Idle {
            return;
        }
        let qty = quantity.map(|q| q.get_untracked()).unwrap_or(1).max(1);
        set_state.set(AddState::Loading);
        spawn_local(async move {
            let outcome = match cart.add(variant_id, qty).await {
                Ok(_) => AddState::Added,
                Err(_) => AddState::Failed,
            };
            set_state.set(outcome);
            TimeoutFuture::new(FEEDBACK_MS).await;
            set_state.set(AddState::Idle);
        });
    };

    view! {
        <button
            class="quick-add"
            data-product-id=variant_id.to_string()
            data-variant-id=variant_id.to_string()
            disabled=move || state.get() != AddState::Idle
            on:click=on_click
        >
            {move || match state.get() {
                AddState::Idle => view! { <span>{label}</span> }.into_any(),
                AddState::Loading => view! { <span class="loading-spinner"></span> }.into_any(),
                AddState::Added => view! { <span>"✓ Added"</span> }.into_any(),
                AddState::Failed => view! { <span>"Error"</span> }.into_any(),
            }}
        </button>
    }
}
