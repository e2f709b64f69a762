//! Cart Page
//!
//! Full-page cart surface. Rows are the same `CartLineItem` the drawer uses,
//! so both surfaces share the one optimistic-update/rollback path and both
//! read the same snapshot signal.

use leptos::prelude::*;

use crate::components::cart_drawer::numbered_lines;
use crate::components::CartLineItem;
use crate::context::{count_badge_class, use_cart};
use crate::money::format_money;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let money_format = cart.money_format();
    let subtotal =
        move || format_money(cart.snapshot.get().total_price, &money_format);

    view! {
        <section class="cart-page">
            <h1 class="cart-page__title">
                "Cart ("
                <span
                    class=move || count_badge_class("cart-page__count", cart.count_pulse.get())
                    data-cart-count=""
                >
                    {move || cart.snapshot.get().item_count}
                </span>
                ")"
            </h1>
            <div class="cart-page__items">
                <For
                    each=move || numbered_lines(&cart.snapshot.get().items)
                    key=|(line, item)| (*line, item.id, item.quantity)
                    children=move |(line, item)| {
                        view! {
                            <CartLineItem
                                line=line
                                item=item
                                qty_input_class="cart-page__qty-input"
                            />
                        }
                    }
                />
                <Show when=move || cart.snapshot.get().items.is_empty()>
                    <p class="cart-page__empty">"Your cart is empty"</p>
                </Show>
            </div>
            <div class="cart-page__summary">
                <span>"Subtotal"</span>
                <span data-cart-subtotal="">{subtotal}</span>
            </div>
        </section>
    }
}
