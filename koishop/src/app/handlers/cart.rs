//! # Cart Handlers
//!
//! Add-to-cart navigation and the cart screen's on-mount fetches.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Route, Screen};
use crate::app::tasks::ScreenTasks;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::Koi;
use std::sync::Arc;

/// Handle "add to cart" on the koi detail screen: navigate to the cart with
/// the selected koi as a route parameter. The cart accumulates items in
/// local state only.
pub(crate) fn handle_add_to_cart(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    koi: Koi,
) {
    super::navigation::navigate_to(state, tasks, event_tx, Route::Cart { added: Some(koi) });
}

/// Fetch the server-side cart listing and the voucher list when the cart
/// screen mounts.
pub(crate) fn fetch_cart_and_vouchers(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => return,
    };

    let cart_client = api_client.clone();
    let cart_tx = event_tx.clone();
    tasks.spawn_for(Screen::Cart, async move {
        let result = cart_client.fetch_cart().await;
        let _ = cart_tx.send(AppEvent::CartResult(result)).await;
    });

    tasks.spawn_for(Screen::Cart, async move {
        let result = api_client.fetch_vouchers().await;
        let _ = event_tx.send(AppEvent::VouchersResult(result)).await;
    });
}
