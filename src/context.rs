//! Cart Context
//!
//! App-wide cart client provided via the Leptos context API. Owns the
//! authoritative cart snapshot signal, the drawer state, and the count-pulse
//! flag; every remote operation funnels through here so that each response
//! broadcast reaches all bound views in one signal write.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::{CartRoutes, ThemeConfig};
use crate::debounce::Debouncer;
use crate::error::CartError;
use crate::models::CartSnapshot;

/// How long the count badge keeps its pulse class after a broadcast.
pub const COUNT_PULSE_MS: u32 = 300;

/// Caller-side inactivity before a note edit goes to the network.
pub const NOTE_DEBOUNCE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct CartContext {
    config: StoredValue<ThemeConfig>,
    /// Last authoritative snapshot from the cart service - read
    pub snapshot: ReadSignal<CartSnapshot>,
    set_snapshot: WriteSignal<CartSnapshot>,
    /// Drawer OPEN/CLOSED - read
    pub drawer_open: ReadSignal<bool>,
    set_drawer_open: WriteSignal<bool>,
    /// True for a short window after each broadcast - read
    pub count_pulse: ReadSignal<bool>,
    set_count_pulse: WriteSignal<bool>,
    // Timer handles are !Send, so they live in local storage
    pulse_timer: StoredValue<Option<Timeout>, LocalStorage>,
    note_debounce: StoredValue<Debouncer, LocalStorage>,
}

impl CartContext {
    pub fn new(config: ThemeConfig) -> Self {
        let (snapshot, set_snapshot) = signal(CartSnapshot::default());
        let (drawer_open, set_drawer_open) = signal(false);
        let (count_pulse, set_count_pulse) = signal(false);
        Self {
            config: StoredValue::new(config),
            snapshot,
            set_snapshot,
            drawer_open,
            set_drawer_open,
            count_pulse,
            set_count_pulse,
            pulse_timer: StoredValue::new_local(None),
            note_debounce: StoredValue::new_local(Debouncer::new(NOTE_DEBOUNCE_MS)),
        }
    }

    pub fn config(self) -> ThemeConfig {
        self.config.get_value()
    }

    fn routes(self) -> CartRoutes {
        self.config.with_value(|c| c.routes.clone())
    }

    pub fn money_format(self) -> String {
        self.config.with_value(|c| c.money_format.clone())
    }

    // ========================
    // Broadcast
    // ========================

    /// Replace local cart state with `snapshot` and pulse the count badges.
    /// One signal write updates every bound view at once.
    pub fn apply_snapshot(self, snapshot: CartSnapshot) {
        self.set_snapshot.set(snapshot);
        self.set_count_pulse.set(true);
        let set_count_pulse = self.set_count_pulse;
        // Replacing the handle cancels the previous pulse timer
        self.pulse_timer.set_value(Some(Timeout::new(COUNT_PULSE_MS, move || {
            set_count_pulse.set(false);
        })));
    }

    // ========================
    // Remote Operations
    // ========================

    /// Add a variant to the cart. On success the new snapshot is broadcast
    /// and the drawer opens.
    pub async fn add(self, variant_id: u64, quantity: u32) -> Result<CartSnapshot, CartError> {
        let routes = self.routes();
        match api::add_item(&routes, variant_id, quantity).await {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot.clone());
                self.open_drawer();
                Ok(snapshot)
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CART] add failed: {e}").into());
                Err(e)
            }
        }
    }

    /// Set the absolute quantity of a 1-based line (0 removes it). On success
    /// the new snapshot is broadcast; the caller decides about reloads.
    pub async fn set_line_quantity(
        self,
        line: u32,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        let routes = self.routes();
        match api::change_line(&routes, line, quantity).await {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot.clone());
                Ok(snapshot)
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CART] change failed: {e}").into());
                Err(e)
            }
        }
    }

    /// Debounced note update: a burst of keystrokes produces one request
    /// carrying the final text.
    pub fn update_note(self, note: String) {
        let routes = self.routes();
        self.note_debounce.update_value(|debounce| {
            debounce.call(move || {
                spawn_local(async move {
                    if let Err(e) = api::update_note(&routes, &note).await {
                        web_sys::console::error_1(&format!("[CART] note failed: {e}").into());
                    }
                });
            });
        });
    }

    /// Drop any pending note timer without firing it (component teardown).
    pub fn cancel_pending_note(self) {
        self.note_debounce.update_value(|debounce| debounce.cancel());
    }

    /// Fetch and broadcast the current cart. Fallback refresh for mount time,
    /// when no snapshot is in hand yet.
    pub async fn refresh(self) {
        let routes = self.routes();
        match api::get_cart(&routes).await {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                web_sys::console::error_1(&format!("[CART] refresh failed: {e}").into());
            }
        }
    }

    // ========================
    // Drawer
    // ========================

    pub fn open_drawer(self) {
        self.set_drawer_open.set(true);
        set_body_scroll_lock(true);
    }

    pub fn close_drawer(self) {
        self.set_drawer_open.set(false);
        set_body_scroll_lock(false);
    }
}

fn set_body_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Class list for a count badge: the base class, plus `cart-pop` while a
/// broadcast pulse is active. Every count badge goes through this, so a
/// broadcast pulses all of them, not just the header's.
pub fn count_badge_class(base: &str, pulse: bool) -> String {
    if pulse {
        format!("{base} cart-pop")
    } else {
        base.to_string()
    }
}

/// Build the context from config and provide it to the component tree.
pub fn provide_cart_context(config: ThemeConfig) -> CartContext {
    let ctx = CartContext::new(config);
    provide_context(ctx);
    ctx
}

/// Get the cart context from any component below `App`.
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_badge_pulses_on_broadcast() {
        assert_eq!(count_badge_class("cart-count", false), "cart-count");
        assert_eq!(count_badge_class("cart-count", true), "cart-count cart-pop");
        assert_eq!(
            count_badge_class("cart-page__count", true),
            "cart-page__count cart-pop"
        );
    }
}
