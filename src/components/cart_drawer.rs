//! Cart Drawer
//!
//! Slide-over panel showing the cart lines, note field, subtotal and
//! checkout. OPEN/CLOSED lives on the cart context; the body scroll lock is
//! handled there too, so a successful add can open the drawer from anywhere.

use leptos::prelude::*;

use crate::components::{CartLineItem, CartNote};
use crate::context::use_cart;
use crate::models::LineItem;
use crate::money::format_money;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = use_cart();
    let money_format = cart.money_format();
    let subtotal =
        move || format_money(cart.snapshot.get().total_price, &money_format);

    view! {
        <div class="cart-drawer" class:active=move || cart.drawer_open.get() data-cart-drawer="">
            <div
                class="cart-drawer__overlay"
                data-cart-close=""
                on:click=move |_| cart.close_drawer()
            ></div>
            <aside class="cart-drawer__panel">
                <header class="cart-drawer__header">
                    <h2>"Your Cart"</h2>
                    <button
                        class="cart-drawer__close"
                        data-cart-close=""
                        on:click=move |_| cart.close_drawer()
                    >
                        "×"
                    </button>
                </header>

                <div class="cart-drawer__lines">
                    <For
                        each=move || numbered_lines(&cart.snapshot.get().items)
                        key=|(line, item)| (*line, item.id, item.quantity)
                        children=move |(line, item)| {
                            view! { <CartLineItem line=line item=item /> }
                        }
                    />
                    <Show when=move || cart.snapshot.get().items.is_empty()>
                        <p class="cart-drawer__empty">"Your cart is empty"</p>
                    </Show>
                </div>

                <CartNote />

                <footer class="cart-drawer__footer">
                    <div class="cart-drawer__subtotal">
                        <span>"Subtotal"</span>
                        <span data-cart-subtotal="">{subtotal}</span>
                    </div>
                    <button
                        class="cart-drawer__checkout"
                        data-checkout-btn=""
                        on:click=move |_| go_to_checkout()
                    >
                        "Checkout"
                    </button>
                </footer>
            </aside>
        </div>
    }
}

/// Pair each line item with its 1-based line number.
pub fn numbered_lines(items: &[LineItem]) -> Vec<(u32, LineItem)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (index as u32 + 1, item.clone()))
        .collect()
}

fn go_to_checkout() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/checkout");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_lines_are_one_based_and_ordered() {
        let items = vec![
            LineItem { id: 11, title: "A".into(), price: 100, quantity: 1 },
            LineItem { id: 22, title: "B".into(), price: 200, quantity: 3 },
        ];
        let lines = numbered_lines(&items);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, 1);
        assert_eq!(lines[0].1.id, 11);
        assert_eq!(lines[1].0, 2);
        assert_eq!(lines[1].1.id, 22);
    }
}
