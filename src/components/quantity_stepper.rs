//! Quantity Stepper Component
//!
//! Decrease/increase buttons and a direct numeric input, all funnelling into
//! one "set absolute quantity" callback. The minimum is 0 on cart surfaces
//! (removal) and 1 on the product page, where 0 is not a purchasable amount.

use leptos::prelude::*;

use crate::quantity::{clamp_quantity, parse_quantity};

#[component]
pub fn QuantityStepper(
    #[prop(into)] value: Signal<u32>,
    #[prop(default = 0)] min: u32,
    /// Surface-specific class for the input, e.g. the cart page's hook.
    #[prop(optional)]
    input_class: &'static str,
    on_set: impl Fn(u32) + Copy + 'static,
) -> impl IntoView {
    let decrease = move |_| {
        on_set(clamp_quantity(value.get_untracked() as i64 - 1, min));
    };
    let increase = move |_| {
        on_set(clamp_quantity(value.get_untracked() as i64 + 1, min));
    };

    view! {
        <div class="qty-stepper">
            <button class="qty-stepper__btn" data-qty-decrease="" on:click=decrease>
                "−"
            </button>
            <input
                class=stepper_input_class(input_class)
                type="number"
                min=min.to_string()
                data-qty-input=""
                prop:value=move || value.get().to_string()
                on:change=move |ev| on_set(parse_quantity(&event_target_value(&ev), min))
            />
            <button class="qty-stepper__btn" data-qty-increase="" on:click=increase>
                "+"
            </button>
        </div>
    }
}

/// Base input class plus the optional surface hook class.
fn stepper_input_class(extra: &str) -> String {
    if extra.is_empty() {
        "qty-stepper__input".to_string()
    } else {
        format!("qty-stepper__input {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_carries_surface_hook() {
        assert_eq!(stepper_input_class(""), "qty-stepper__input");
        assert_eq!(
            stepper_input_class("cart-page__qty-input"),
            "qty-stepper__input cart-page__qty-input"
        );
    }
}
