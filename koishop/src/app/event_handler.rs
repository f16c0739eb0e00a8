//! # Event Handler
//!
//! Processes `AppEvent` results from background tasks, updating application
//! state. This is also where the forced Authenticated → Anonymous transition
//! lives: any auth-rejection on a session-dependent call clears the session
//! and redirects to Login.

use crate::app::events::AppEvent;
use crate::app::state::{AuthState, Route, Screen};
use crate::app::App;
use crate::core::error::ApiError;
use crate::core::service::ApiService;
use shared::{Account, AuthResponse, Blog, CartItem, Koi, Voucher};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::SignupResult(result) => self.handle_signup_result(result),
            AppEvent::AccountResult(result) => self.handle_account_result(result),
            AppEvent::AccountUpdated(result) => self.handle_account_updated(result),
            AppEvent::PasswordChanged(result) => self.handle_password_changed(result),
            AppEvent::LoggedOut => self.handle_logged_out(),
            AppEvent::KoiListResult(result) => self.handle_koi_list_result(result),
            AppEvent::KoiDetailResult(result) => self.handle_koi_detail_result(result),
            AppEvent::BlogListResult(result) => self.handle_blog_list_result(result),
            AppEvent::BlogDetailResult(result) => self.handle_blog_detail_result(result),
            AppEvent::CommentPosted(result) => self.handle_comment_posted(result),
            AppEvent::CartResult(result) => self.handle_cart_result(result),
            AppEvent::VouchersResult(result) => self.handle_vouchers_result(result),
            AppEvent::SplashElapsed => self.handle_splash_elapsed(),
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<AuthResponse, ApiError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        match result {
            Ok(auth) => {
                {
                    let mut state = self.state.write();
                    state.auth_token = Some(auth.token);
                    if let AuthState::Login {
                        submitting, error, ..
                    } = &mut state.auth
                    {
                        *submitting = false;
                        *error = None;
                    }
                }
                // Fetch the account record up front so handlers that need the
                // current user's identity (the one-comment-per-koi check) have
                // it without an Account-screen visit. Session-scoped, so not
                // registered under any screen.
                if let Some(client) = self.state.read().api_client.clone() {
                    let tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        let result = client.fetch_account().await;
                        let _ = tx.send(AppEvent::AccountResult(result)).await;
                    });
                }
                // Login gates the main tabs; land on Home
                crate::app::handlers::navigation::reset_to(
                    self.state.clone(),
                    self.tasks.clone(),
                    self.event_tx.clone(),
                    Route::Home,
                );
            }
            Err(e) => {
                let mut state = self.state.write();
                if let AuthState::Login {
                    submitting, error, ..
                } = &mut state.auth
                {
                    *submitting = false;
                    *error = Some(e.to_string());
                }
            }
        }
    }

    fn handle_signup_result(&mut self, result: Result<Account, ApiError>) {
        match result {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "Registration successful");
                let mut state = self.state.write();
                state.auth = AuthState::Login {
                    email: account.email,
                    password: String::new(),
                    submitting: false,
                    error: Some("Account created, please log in".to_string()),
                };
                state.current_screen = Screen::Login;
                state.nav_stack = vec![Route::Login];
            }
            Err(e) => {
                let mut state = self.state.write();
                if let AuthState::Signup {
                    submitting, error, ..
                } = &mut state.auth
                {
                    *submitting = false;
                    *error = Some(e.to_string());
                }
            }
        }
    }

    /// Forced Authenticated → Anonymous transition: the server rejected the
    /// token, so the client's belief is stale. Clear it everywhere and
    /// prompt re-login.
    fn force_anonymous(&mut self, message: &str) {
        tracing::warn!("Auth rejected, forcing session back to anonymous");

        // The persisted-token clear must run to completion even if the user
        // navigates immediately, so it is not registered under any screen
        if let Some(client) = self.state.read().api_client.clone() {
            tokio::spawn(async move {
                client.logout().await;
            });
        }

        let mut state = self.state.write();
        state.auth_token = None;
        state.account = Default::default();
        state.auth = AuthState::Login {
            email: String::new(),
            password: String::new(),
            submitting: false,
            error: Some(message.to_string()),
        };
        state.current_screen = Screen::Login;
        state.nav_stack = vec![Route::Login];
    }

    fn handle_account_result(&mut self, result: Result<Account, ApiError>) {
        match result {
            Ok(account) => {
                let mut state = self.state.write();
                state.account.account = Some(account);
                state.account.loading = false;
                state.account.error = None;
            }
            Err(e) if e.is_auth() => {
                self.force_anonymous("Session expired, please log in again");
            }
            Err(e) => {
                let mut state = self.state.write();
                state.account.loading = false;
                state.account.error = Some(e.to_string());
            }
        }
    }

    fn handle_account_updated(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                // Server owns the merge; refetch instead of patching locally
                crate::app::handlers::account::fetch_account(
                    self.state.clone(),
                    self.tasks.clone(),
                    self.event_tx.clone(),
                );
            }
            Err(e) if e.is_auth() => {
                self.force_anonymous("Session expired, please log in again");
            }
            Err(e) => {
                self.state.write().account.error = Some(e.to_string());
            }
        }
    }

    fn handle_password_changed(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.state.write().account.error = Some("Password updated".to_string());
            }
            Err(e) if e.is_auth() => {
                self.force_anonymous("Session expired, please log in again");
            }
            Err(e) => {
                self.state.write().account.error = Some(e.to_string());
            }
        }
    }

    fn handle_logged_out(&mut self) {
        let mut state = self.state.write();
        state.auth_token = None;
        state.account = Default::default();
        state.cart.clear();
        state.auth = AuthState::empty_login();
        state.current_screen = Screen::Login;
        state.nav_stack = vec![Route::Login];
    }

    fn handle_koi_list_result(&mut self, result: Result<Vec<Koi>, ApiError>) {
        let mut state = self.state.write();
        state.catalog.loading = false;
        match result {
            Ok(koi) => {
                state.catalog.koi = koi;
                state.catalog.error = None;
            }
            Err(e) => {
                // The catalog shows an empty list on failure
                state.catalog.koi = Vec::new();
                state.catalog.error = Some(e.to_string());
            }
        }
    }

    fn handle_koi_detail_result(&mut self, result: Result<Koi, ApiError>) {
        let mut state = self.state.write();
        state.koi_detail.loading = false;
        match result {
            Ok(koi) => {
                state.koi_detail.koi = Some(koi);
                state.koi_detail.error = None;
            }
            Err(e) => {
                state.koi_detail.error = Some(e.to_string());
            }
        }
    }

    fn handle_blog_list_result(&mut self, result: Result<Vec<Blog>, ApiError>) {
        let mut state = self.state.write();
        state.blog.loading = false;
        match result {
            Ok(posts) => {
                state.blog.posts = posts;
                state.blog.error = None;
            }
            Err(e) => {
                state.blog.error = Some(e.to_string());
            }
        }
    }

    fn handle_blog_detail_result(&mut self, result: Result<Blog, ApiError>) {
        let mut state = self.state.write();
        state.blog.loading = false;
        match result {
            Ok(post) => {
                state.blog.detail = Some(post);
                state.blog.error = None;
            }
            Err(e) => {
                state.blog.error = Some(e.to_string());
            }
        }
    }

    fn handle_comment_posted(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                let koi_id = {
                    let mut state = self.state.write();
                    state.koi_detail.comment_content.clear();
                    state.koi_detail.comment_rating = 0;
                    state.koi_detail.comment_error = None;
                    state.koi_detail.koi.as_ref().map(|k| k.id.clone())
                };
                // Refetch so the new comment shows up
                if let Some(id) = koi_id {
                    crate::app::handlers::catalog::fetch_koi_detail(
                        self.state.clone(),
                        self.tasks.clone(),
                        self.event_tx.clone(),
                        id,
                    );
                }
            }
            Err(e) => {
                self.state.write().koi_detail.comment_error = Some(e.to_string());
            }
        }
    }

    fn handle_cart_result(&mut self, result: Result<Vec<CartItem>, ApiError>) {
        match result {
            Ok(items) => {
                self.state.write().server_cart = items;
            }
            Err(e) if e.is_auth() => {
                self.force_anonymous("Session expired, please log in again");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cart fetch failed");
            }
        }
    }

    fn handle_vouchers_result(&mut self, result: Result<Vec<Voucher>, ApiError>) {
        match result {
            Ok(vouchers) => {
                // Expired vouchers are not offered
                let now = chrono::Utc::now();
                let live: Vec<Voucher> =
                    vouchers.into_iter().filter(|v| !v.is_expired(now)).collect();
                self.state.write().vouchers = live;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Voucher fetch failed");
            }
        }
    }

    fn handle_splash_elapsed(&mut self) {
        // Only advance if the user is still on the splash screen
        if self.state.read().current_screen != Screen::Loading {
            return;
        }
        crate::app::handlers::navigation::reset_to(
            self.state.clone(),
            self.tasks.clone(),
            self.event_tx.clone(),
            Route::Login,
        );
    }
}
