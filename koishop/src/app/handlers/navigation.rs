//! # Navigation Handlers
//!
//! Route transitions with the centralized authentication guard, the
//! navigation stack, and per-screen on-mount fetches. Leaving a screen
//! aborts its in-flight requests.

use crate::app::events::AppEvent;
use crate::app::state::{guard, AppState, Route, RouteDecision, Screen};
use crate::app::tasks::ScreenTasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Splash screen display time before auto-advancing to Login.
pub const SPLASH_DELAY: Duration = Duration::from_secs(3);

/// Navigate to a route, pushing it onto the stack.
///
/// The guard is evaluated once here for every attempt; a protected route
/// without a live session redirects to Login instead.
pub(crate) fn navigate_to(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    route: Route,
) {
    let decision = {
        let state = state.read();
        guard(route.screen(), state.is_authenticated())
    };

    let route = match decision {
        RouteDecision::Allow => route,
        RouteDecision::RedirectToLogin => {
            tracing::info!(
                denied = route.screen().title(),
                "Access denied: screen requires authentication, redirecting to Login"
            );
            Route::Login
        }
    };

    let left = {
        let mut state = state.write();
        let left = state.current_screen;
        state.current_screen = route.screen();
        state.nav_stack.push(route.clone());
        left
    };

    if left != route.screen() {
        tasks.abort_for(left);
    }
    mount(state, tasks, event_tx, &route);
}

/// Replace the whole stack with a single route (tab switches, post-login).
pub(crate) fn reset_to(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    route: Route,
) {
    let decision = {
        let state = state.read();
        guard(route.screen(), state.is_authenticated())
    };
    let route = match decision {
        RouteDecision::Allow => route,
        RouteDecision::RedirectToLogin => Route::Login,
    };

    let left = {
        let mut state = state.write();
        let left = state.current_screen;
        state.current_screen = route.screen();
        state.nav_stack.clear();
        state.nav_stack.push(route.clone());
        left
    };

    if left != route.screen() {
        tasks.abort_for(left);
    }
    mount(state, tasks, event_tx, &route);
}

/// Pop the navigation stack. A pop from the root is a no-op.
pub(crate) fn go_back(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let (left, target) = {
        let mut state = state.write();
        if state.nav_stack.len() < 2 {
            return;
        }
        let left = state.current_screen;
        state.nav_stack.pop();
        let target = state
            .nav_stack
            .last()
            .cloned()
            .unwrap_or(Route::Home);
        state.current_screen = target.screen();
        (left, target)
    };

    if left != target.screen() {
        tasks.abort_for(left);
    }
    // Re-mount so the screen re-fetches fresh data
    mount(state, tasks, event_tx, &target);
}

/// Start the splash timer: Loading auto-advances to Login after a fixed
/// delay.
pub(crate) fn start_splash(tasks: Arc<ScreenTasks>, event_tx: Sender<AppEvent>) {
    tasks.spawn_for(Screen::Loading, async move {
        tokio::time::sleep(SPLASH_DELAY).await;
        let _ = event_tx.send(AppEvent::SplashElapsed).await;
    });
}

/// Per-screen on-mount behavior: the fetches each screen issues when it
/// becomes current, per the screen contract table.
fn mount(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    route: &Route,
) {
    match route {
        Route::Home => {
            super::catalog::fetch_blog_list(state, tasks, event_tx, Screen::Home);
        }
        Route::KoiCatalog => {
            super::catalog::fetch_koi_list(state, tasks, event_tx);
        }
        Route::KoiDetail { id } => {
            super::catalog::fetch_koi_detail(state, tasks, event_tx, id.clone());
        }
        Route::BlogCatalog => {
            super::catalog::fetch_blog_list(state, tasks, event_tx, Screen::BlogCatalog);
        }
        Route::BlogDetail { id } => {
            super::catalog::fetch_blog_detail(state, tasks, event_tx, id.clone());
        }
        Route::Account => {
            super::account::fetch_account(state, tasks, event_tx);
        }
        Route::Cart { added } => {
            if let Some(koi) = added {
                let mut state_guard = state.write();
                state_guard.cart.push(koi.clone());
                tracing::info!(koi_id = %koi.id, cart_len = state_guard.cart.len(), "Added koi to cart");
                // Consume the add: the stack keeps a plain Cart entry so a
                // later re-mount (go_back, tab return) cannot repeat it
                if let Some(entry @ Route::Cart { added: Some(_) }) = state_guard.nav_stack.last_mut()
                {
                    *entry = Route::Cart { added: None };
                }
            }
            super::cart::fetch_cart_and_vouchers(state, tasks, event_tx);
        }
        // Loading, Login, and Signup issue no on-mount calls
        Route::Loading | Route::Login | Route::Signup => {}
    }
}
