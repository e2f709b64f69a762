//! Storefront Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod money;
mod quantity;
mod counter;
mod debounce;
mod scroll;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
