//! Storefront App
//!
//! Page layout wiring every surface together: header with cart toggle and
//! count badge, hero with parallax media and stat counters, staggered
//! featured-product grid with quick add, product detail with gallery and
//! pre-add quantity selector, cart page, and the cart drawer.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    CartDrawer, CartPage, ProductGallery, QuantityStepper, QuickAddButton, Reveal, StatCounter,
};
use crate::config::ThemeConfig;
use crate::context::{count_badge_class, provide_cart_context};
use crate::models::Product;
use crate::money::format_money;
use crate::quantity::PRODUCT_MIN_QTY;
use crate::scroll::{bind_parallax, stagger_delay_ms, use_reveal, REVEAL_THRESHOLD};

/// Hero media moves at a tenth of the scroll speed, up to 800px of scroll.
const PARALLAX_FACTOR: f64 = 0.1;
const PARALLAX_MAX_SCROLL: f64 = 800.0;

#[component]
pub fn App() -> impl IntoView {
    let config = ThemeConfig::from_window();
    let grid_money_format = config.money_format.clone();
    let products = if config.products.is_empty() {
        demo_catalog()
    } else {
        config.products.clone()
    };
    let cart = provide_cart_context(config);

    // Pull the current cart once on mount; the broadcast fills every badge
    Effect::new(move |_| {
        spawn_local(async move { cart.refresh().await });
    });

    // Hero parallax
    let hero_media_ref = NodeRef::<Div>::new();
    bind_parallax(hero_media_ref, PARALLAX_FACTOR, PARALLAX_MAX_SCROLL);

    // Featured grid: one observer on the container, cards stagger off it
    let grid_ref = NodeRef::<Div>::new();
    let grid_visible = use_reveal(grid_ref, REVEAL_THRESHOLD, None);

    let detail = products.first().cloned();

    view! {
        <div class="storefront">
            <header class="header">
                <a class="header__logo" href="/">
                    "Storefront"
                </a>
                <button
                    class="header__cart-toggle"
                    data-cart-toggle=""
                    on:click=move |_| cart.open_drawer()
                >
                    "Cart"
                    <span
                        class=move || count_badge_class("cart-count", cart.count_pulse.get())
                        data-cart-count=""
                    >
                        {move || cart.snapshot.get().item_count}
                    </span>
                </button>
            </header>

            <section class="hero">
                <div class="hero__media" node_ref=hero_media_ref></div>
                <div class="hero__content">
                    <h1 class="hero__title">"Crafted for every day"</h1>
                    <div class="hero__stats">
                        <div class="hero__stat">
                            <StatCounter target="250+".to_string() />
                            <span class="hero__stat-label">"Styles"</span>
                        </div>
                        <div class="hero__stat">
                            <StatCounter target="12,000+".to_string() />
                            <span class="hero__stat-label">"Happy customers"</span>
                        </div>
                        <div class="hero__stat">
                            <StatCounter target="98%".to_string() />
                            <span class="hero__stat-label">"Five-star reviews"</span>
                        </div>
                    </div>
                </div>
            </section>

            <Reveal class="featured-products" visible_class="section-visible">
                <Reveal class="featured-products__title" delay_ms=200>
                    <h2>"Featured"</h2>
                </Reveal>
                <div class="featured-products__grid" node_ref=grid_ref>
                    {products
                        .iter()
                        .enumerate()
                        .map(|(index, product)| {
                            let delay = stagger_delay_ms(index);
                            view! {
                                <div
                                    class="product-card"
                                    class=("animate-in", move || grid_visible.get())
                                    style:transition-delay=format!("{delay}ms")
                                >
                                    <img
                                        class="product-card__image"
                                        src=product.images.first().cloned().unwrap_or_default()
                                        alt=product.title.clone()
                                    />
                                    <h3 class="product-card__title">{product.title.clone()}</h3>
                                    <span class="product-card__price">
                                        {format_money(product.price, &grid_money_format)}
                                    </span>
                                    <QuickAddButton variant_id=product.variant_id label="Quick Add" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <Reveal class="trust-badges" visible_class="section-visible">
                <div class="trust-badges__grid">
                    {["Free shipping", "Easy returns", "Secure checkout"]
                        .iter()
                        .enumerate()
                        .map(|(index, label)| {
                            view! {
                                <Reveal class="trust-badge" stagger_index=index>
                                    <span class="trust-badge__label">{*label}</span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>

            {detail.map(|product| view! { <ProductDetail product=product /> })}

            <CartPage />
            <CartDrawer />
        </div>
    }
}

/// Product page surface: gallery, pre-add quantity selector (minimum 1,
/// purely local until "Add to Cart"), and the add button.
#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let cart = crate::context::use_cart();
    let money_format = cart.money_format();
    let (qty, set_qty) = signal(1u32);

    view! {
        <section class="product">
            <ProductGallery images=product.images.clone() />
            <div class="product__info">
                <h2 class="product__title">{product.title.clone()}</h2>
                <span class="product__price">{format_money(product.price, &money_format)}</span>
                <div class="product__quantity-selector">
                    <QuantityStepper
                        value=qty
                        min=PRODUCT_MIN_QTY
                        on_set=move |q| set_qty.set(q)
                    />
                </div>
                <QuickAddButton
                    variant_id=product.variant_id
                    quantity=Signal::from(qty)
                    label="Add to Cart"
                />
            </div>
        </section>
    }
}

/// Catalog shown when the host page injects none.
fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            variant_id: 123456,
            title: "Silk Scarf".to_string(),
            price: 500,
            images: vec![
                "//cdn.example/silk-scarf.jpg?width=120".to_string(),
                "//cdn.example/silk-scarf-back.jpg?width=120".to_string(),
            ],
        },
        Product {
            variant_id: 234567,
            title: "Linen Shirt".to_string(),
            price: 2499,
            images: vec!["//cdn.example/linen-shirt.jpg?width=120".to_string()],
        },
        Product {
            variant_id: 345678,
            title: "Canvas Tote".to_string(),
            price: 1299,
            images: vec!["//cdn.example/canvas-tote.jpg?width=120".to_string()],
        },
    ]
}
