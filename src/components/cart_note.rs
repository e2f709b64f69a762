//! Cart Note Field
//!
//! Free-text order note. Edits go through the context's debounced update, so
//! a burst of keystrokes becomes a single request with the final text.

use leptos::prelude::*;

use crate::context::use_cart;

#[component]
pub fn CartNote() -> impl IntoView {
    let cart = use_cart();
    on_cleanup(move || cart.cancel_pending_note());

    view! {
        <div class="cart-note">
            <label class="cart-note__label" for="cart-note">
                "Order note"
            </label>
            <textarea
                id="cart-note"
                class="cart-note__input"
                data-cart-note=""
                placeholder="Add a note to your order"
                on:input=move |ev| cart.update_note(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
