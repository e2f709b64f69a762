//! Cart Line Item
//!
//! One cart row, shared by the drawer and the cart page. The stepper writes
//! the new quantity optimistically; on failure the input returns to the
//! exact pre-gesture value (snapshotted before the call, never inferred from
//! which button fired) and a transient "Error" label shows.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::QuantityStepper;
use crate::context::use_cart;
use crate::models::LineItem;
use crate::money::format_money;
use crate::quantity::CART_MIN_QTY;

/// How long the "Error" label stays after a failed update.
const ERROR_LABEL_MS: u32 = 1500;

#[component]
pub fn CartLineItem(
    /// 1-based position of this row in the cart.
    line: u32,
    item: LineItem,
    /// Surface-specific class for the quantity input (cart page rows).
    #[prop(optional)]
    qty_input_class: &'static str,
) -> impl IntoView {
    let cart = use_cart();
    let money_format = cart.money_format();
    let (display_qty, set_display_qty) = signal(item.quantity);
    let (failed, set_failed) = signal(false);
    let (busy, set_busy) = signal(false);

    let set_quantity = move |next: u32| {
        let prev = display_qty.get_untracked();
        if next == prev {
            return;
        }
        // Optimistic: show the new value before the round trip resolves
        set_display_qty.set(next);
        set_busy.set(true);
        spawn_local(async move {
            match cart.set_line_quantity(line, next).await {
                Ok(snapshot) => {
                    set_busy.set(false);
                    // Removing the last line reloads the page (observable
                    // contract of the theme, kept as-is)
                    if next == 0 && snapshot.item_count == 0 {
                        reload_page();
                    }
                }
                Err(_) => {
                    set_display_qty.set(prev);
                    set_busy.set(false);
                    set_failed.set(true);
                    TimeoutFuture::new(ERROR_LABEL_MS).await;
                    set_failed.set(false);
                }
            }
        });
    };

    view! {
        <div class="cart-line" class=("is-loading", move || busy.get()) data-line-item=line.to_string()>
            <div class="cart-line__info">
                <span class="cart-line__title">{item.title.clone()}</span>
                <span class="cart-line__price">{format_money(item.price, &money_format)}</span>
            </div>
            <div class="cart-line__quantity">
                <QuantityStepper
                    value=display_qty
                    min=CART_MIN_QTY
                    input_class=qty_input_class
                    on_set=set_quantity
                />
                <Show when=move || failed.get()>
                    <span class="cart-line__error">"Error"</span>
                </Show>
            </div>
            <button class="cart-line__remove" data-remove-item="" on:click=move |_| set_quantity(0)>
                "Remove"
            </button>
        </div>
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
