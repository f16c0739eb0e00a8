//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the rendering layer, async task
//! handlers, and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Main Thread                         │
//! │  ┌──────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                              │   │
//! │  │  - on_tick() - drains async results              │   │
//! │  │  - handle_*_click() - user action handlers       │   │
//! │  │  - navigate_to() / go_back() - guarded routing   │   │
//! │  └────────────┬─────────────────────────────────────┘   │
//! │               │                                         │
//! │  ┌────────────▼─────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                    │   │
//! │  │  - locks held briefly, never across an await     │   │
//! │  └──────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────┐
//! │                Async Tasks (Tokio)                      │
//! │  - ApiClient calls, tracked per screen in ScreenTasks   │
//! │  - results come back as AppEvent messages               │
//! │  - leaving a screen aborts its in-flight tasks          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: orchestrator owning the event channel and task registry
//! - **[`AppState`]**: shared state behind `Arc<RwLock>` (see [`state`])
//! - **[`AppEvent`]**: async task results (see [`events`])
//! - **[`handlers`]**: user action handlers (auth, navigation, catalog,
//!   account, comment, cart)
//! - **[`tasks`]**: per-screen task tracking with abort-on-leave

mod event_handler;
mod events;
pub(crate) mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;
pub use tasks::ScreenTasks;

use crate::config::ClientConfig;
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use async_channel::{unbounded, Receiver, Sender};
use event_handler::AppEventHandler;
use parking_lot::RwLock;
use shared::{AccountPatch, Koi};
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the shared state, the event channel async tasks report into, and
/// the per-screen task registry. All user actions enter through the
/// `handle_*` methods; all async results leave through [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state. Read for rendering, written
    /// by handlers and the event processor. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Sender cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    /// Per-screen background task registry.
    tasks: Arc<ScreenTasks>,

    /// Client configuration (base URL, timeout, comment policy).
    config: ClientConfig,
}

impl App {
    /// Create a new application instance.
    ///
    /// Builds the one API client every screen shares, wires the event
    /// channel, and seeds the state on the splash screen. No tasks are
    /// spawned here; call [`App::start`] once a runtime is available.
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        let api_client = Arc::new(ApiClient::new(&config, store));

        let state = AppState {
            current_screen: Screen::Loading,
            nav_stack: vec![Route::Loading],
            auth_token: None,
            auth: AuthState::empty_login(),
            catalog: CatalogState::default(),
            koi_detail: KoiDetailState::default(),
            blog: BlogState::default(),
            account: AccountState::default(),
            cart: Vec::new(),
            server_cart: Vec::new(),
            vouchers: Vec::new(),
            api_client: Some(api_client),
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!(base_url = %config.base_url, "App state initialized");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            tasks: Arc::new(ScreenTasks::new()),
            config,
        }
    }

    /// Start the application: restore any persisted session and arm the
    /// splash timer that advances Loading → Login.
    pub async fn start(&self) {
        let session = self
            .state
            .read()
            .api_client
            .as_ref()
            .map(|c| c.session().clone());

        if let Some(session) = session {
            session.load().await;
            self.state.write().auth_token = session.token();
        }

        handlers::navigation::start_splash(self.tasks.clone(), self.event_tx.clone());
    }

    /// Called every frame to process pending async events. Non-blocking:
    /// drains whatever the channel holds and returns.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    /// Abort every outstanding background task. Called on shutdown.
    pub fn shutdown(&self) {
        self.tasks.abort_all();
    }

    // ── Navigation ────────────────────────────────────────────────────

    /// Navigate to a route. The auth guard runs on every attempt.
    pub fn navigate_to(&mut self, route: Route) {
        handlers::navigation::navigate_to(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            route,
        );
    }

    /// Pop the navigation stack; a pop from the root is a no-op.
    pub fn go_back(&mut self) {
        handlers::navigation::go_back(self.state.clone(), self.tasks.clone(), self.event_tx.clone());
    }

    // ── Auth ──────────────────────────────────────────────────────────

    /// Handle login button click
    pub fn handle_login_click(&mut self, email: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            email,
            password,
        );
    }

    /// Handle signup button click; reads the form out of state.
    pub fn handle_signup_click(&mut self) {
        handlers::auth::handle_signup_click(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
        );
    }

    /// Switch the auth screen to the login form
    pub fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    /// Switch the auth screen to the signup form
    pub fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }

    /// Handle logout button click
    pub fn handle_logout_click(&mut self) {
        handlers::account::handle_logout_click(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
        );
    }

    // ── Catalog ───────────────────────────────────────────────────────

    /// Replace the catalog filter; purely local, no network call.
    pub fn handle_filter_change(&mut self, filter: KoiFilter) {
        handlers::catalog::handle_filter_change(self.state.clone(), filter);
    }

    // ── Account ───────────────────────────────────────────────────────

    /// Handle profile save click
    pub fn handle_update_click(&mut self, patch: AccountPatch) {
        handlers::account::handle_update_click(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            patch,
        );
    }

    /// Handle password change click
    pub fn handle_change_password_click(
        &mut self,
        old_password: String,
        new_password: String,
        confirmation: String,
    ) {
        handlers::account::handle_change_password_click(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            old_password,
            new_password,
            confirmation,
        );
    }

    // ── Koi detail ────────────────────────────────────────────────────

    /// Handle comment submit on the koi detail screen
    pub fn handle_post_comment(&mut self) {
        handlers::comment::handle_post_comment(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            self.config.single_comment_per_koi,
        );
    }

    /// Handle add-to-cart on the koi detail screen
    pub fn handle_add_to_cart(&mut self, koi: Koi) {
        handlers::cart::handle_add_to_cart(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            koi,
        );
    }
}
