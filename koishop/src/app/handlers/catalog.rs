//! # Catalog Handlers
//!
//! Koi catalog and blog feed fetches, plus the client-side filter updates.
//! Fetches are spawned under the initiating screen so leaving it aborts
//! them.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, KoiFilter, Screen};
use crate::app::tasks::ScreenTasks;
use crate::core::service::ApiService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fetch the koi catalog for the catalog screen.
pub(crate) fn fetch_koi_list(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let api_client = {
        let mut state = state.write();
        state.catalog.loading = true;
        state.catalog.error = None;
        match state.api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        }
    };

    tasks.spawn_for(Screen::KoiCatalog, async move {
        let result = api_client.list_koi().await;
        let _ = event_tx.send(AppEvent::KoiListResult(result)).await;
    });
}

/// Fetch a single koi for the detail screen.
pub(crate) fn fetch_koi_detail(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    let api_client = {
        let mut state = state.write();
        state.koi_detail = Default::default();
        state.koi_detail.loading = true;
        match state.api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        }
    };

    tasks.spawn_for(Screen::KoiDetail, async move {
        let result = api_client.get_koi(&id).await;
        let _ = event_tx.send(AppEvent::KoiDetailResult(result)).await;
    });
}

/// Fetch the blog feed. Shared by the Home tab and the blog catalog screen,
/// which differ only in which screen owns the in-flight task.
pub(crate) fn fetch_blog_list(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    owner: Screen,
) {
    let api_client = {
        let mut state = state.write();
        state.blog.loading = true;
        state.blog.error = None;
        match state.api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        }
    };

    tasks.spawn_for(owner, async move {
        let result = api_client.list_blogs().await;
        let _ = event_tx.send(AppEvent::BlogListResult(result)).await;
    });
}

/// Fetch a single blog post for the detail screen.
pub(crate) fn fetch_blog_detail(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    id: String,
) {
    let api_client = {
        let mut state = state.write();
        state.blog.detail = None;
        state.blog.loading = true;
        match state.api_client.as_ref() {
            Some(client) => client.clone(),
            None => return,
        }
    };

    tasks.spawn_for(Screen::BlogDetail, async move {
        let result = api_client.get_blog(&id).await;
        let _ = event_tx.send(AppEvent::BlogDetailResult(result)).await;
    });
}

/// Update the catalog filter. Purely local: re-renders the visible list from
/// the already-fetched catalog without a network call.
pub(crate) fn handle_filter_change(state: Arc<RwLock<AppState>>, filter: KoiFilter) {
    let mut state = state.write();
    tracing::debug!(?filter, "Catalog filter changed");
    state.catalog.filter = filter;
}
