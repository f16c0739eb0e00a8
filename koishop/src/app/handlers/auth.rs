//! # Authentication Handlers
//!
//! Handlers for login, signup, and form switching. Form validation happens
//! here, before any network call.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState, Screen};
use crate::app::tasks::ScreenTasks;
use crate::core::service::ApiService;
use crate::utils::validation::{validate_email, validate_password_pair, validate_phone};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

fn set_login_error(state: &Arc<RwLock<AppState>>, message: impl Into<String>) {
    let mut state = state.write();
    if let AuthState::Login { error, .. } = &mut state.auth {
        *error = Some(message.into());
    }
}

fn set_signup_error(state: &Arc<RwLock<AppState>>, message: impl Into<String>) {
    let mut state = state.write();
    if let AuthState::Signup { error, .. } = &mut state.auth {
        *error = Some(message.into());
    }
}

/// Handle login button click
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    if email.is_empty() || password.is_empty() {
        set_login_error(&state, "Email and password required");
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            set_login_error(&state, "API client not available");
            return;
        }
    };

    {
        let mut state = state.write();
        if let AuthState::Login {
            submitting, error, ..
        } = &mut state.auth
        {
            *submitting = true;
            *error = None;
        }
    }

    let tx = event_tx.clone();
    tasks.spawn_for(Screen::Login, async move {
        let result = api_client.login(email, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle signup button click.
///
/// Email format, phone format, and password/confirmation match are checked
/// client-side; only a clean form reaches the API.
pub(crate) fn handle_signup_click(
    state: Arc<RwLock<AppState>>,
    tasks: Arc<ScreenTasks>,
    event_tx: Sender<AppEvent>,
) {
    let (email, password, confirm_password, phone, name, address) = {
        let state = state.read();
        match &state.auth {
            AuthState::Signup {
                email,
                password,
                confirm_password,
                phone,
                name,
                address,
                ..
            } => (
                email.clone(),
                password.clone(),
                confirm_password.clone(),
                phone.clone(),
                name.clone(),
                address.clone(),
            ),
            AuthState::Login { .. } => return,
        }
    };

    if name.is_empty() || address.is_empty() {
        set_signup_error(&state, "All fields required");
        return;
    }

    let email_check = validate_email(&email);
    if !email_check.is_valid {
        set_signup_error(&state, email_check.error.unwrap_or_default());
        return;
    }

    let phone_check = validate_phone(&phone);
    if !phone_check.is_valid {
        set_signup_error(&state, phone_check.error.unwrap_or_default());
        return;
    }

    let password_check = validate_password_pair(&password, &confirm_password);
    if !password_check.is_valid {
        set_signup_error(&state, password_check.error.unwrap_or_default());
        return;
    }

    let api_client = match state.read().api_client.as_ref() {
        Some(client) => client.clone(),
        None => {
            set_signup_error(&state, "API client not available");
            return;
        }
    };

    {
        let mut state = state.write();
        if let AuthState::Signup {
            submitting, error, ..
        } = &mut state.auth
        {
            *submitting = true;
            *error = None;
        }
    }

    let tx = event_tx.clone();
    tasks.spawn_for(Screen::Signup, async move {
        let result = api_client
            .register(email, password, phone, name, address)
            .await;
        let _ = tx.send(AppEvent::SignupResult(result)).await;
    });
}

/// Switch to login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::empty_login();
    state.current_screen = Screen::Login;
    state.nav_stack.push(crate::app::state::Route::Login);
}

/// Switch to signup form
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.auth = AuthState::empty_signup();
    state.current_screen = Screen::Signup;
    state.nav_stack.push(crate::app::state::Route::Signup);
}
