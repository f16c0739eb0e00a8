//! # Account Handlers
//!
//! Profile fetch/update, password change, and logout.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks::ScreenTasks;
use crate::core::service::ApiService;
use crate::utils::validation::validate_password_pair;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::AccountPatch;
use std::sync::Arc;

/// Fetch the account record when the account screen mounts.
pub(crate) fn fetch_account(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let api_client = {
        let mut state = state.write();
        state.account.loading = true;
        state.account.error = None;
        match state.api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        }
    };

    tasks.spawn_for(Screen::Account, async move {
        let result = api_client.fetch_account().await;
        let _ = event_tx.send(AppEvent::AccountResult(result)).await;
    });
}

/// Handle profile save: send only the changed fields.
pub(crate) fn handle_update_click(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    patch: AccountPatch,
) {
    if patch.is_empty() {
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => return,
    };

    tasks.spawn_for(Screen::Account, async move {
        let result = api_client.update_account(patch).await;
        let _ = event_tx.send(AppEvent::AccountUpdated(result)).await;
    });
}

/// Handle password change: new password and confirmation must match before
/// the call goes out; old-password rules are the server's.
pub(crate) fn handle_change_password_click(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    old_password: String,
    new_password: String,
    confirmation: String,
) {
    let check = validate_password_pair(&new_password, &confirmation);
    if !check.is_valid {
        let mut state = state.write();
        state.account.error = check.error;
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => return,
    };

    tasks.spawn_for(Screen::Account, async move {
        let result = api_client.change_password(old_password, new_password).await;
        let _ = event_tx.send(AppEvent::PasswordChanged(result)).await;
    });
}

/// Handle logout: best-effort clear of the persisted token, then hand the
/// forced Anonymous transition to the event handler.
pub(crate) fn handle_logout_click(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => return,
    };

    tasks.spawn_for(Screen::Account, async move {
        api_client.logout().await;
        let _ = event_tx.send(AppEvent::LoggedOut).await;
    });
}
