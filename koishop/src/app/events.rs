//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread. Every network result crosses this channel as a typed
//! `Result<_, ApiError>`.

use crate::core::error::ApiError;
use shared::{Account, AuthResponse, Blog, CartItem, Koi, Voucher};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Registration completed
    SignupResult(Result<Account, ApiError>),
    /// Account fetch completed
    AccountResult(Result<Account, ApiError>),
    /// Account update completed
    AccountUpdated(Result<(), ApiError>),
    /// Password change completed
    PasswordChanged(Result<(), ApiError>),
    /// Session cleared after logout
    LoggedOut,
    /// Koi catalog fetch completed
    KoiListResult(Result<Vec<Koi>, ApiError>),
    /// Koi detail fetch completed
    KoiDetailResult(Result<Koi, ApiError>),
    /// Blog feed fetch completed
    BlogListResult(Result<Vec<Blog>, ApiError>),
    /// Blog detail fetch completed
    BlogDetailResult(Result<Blog, ApiError>),
    /// Comment post completed
    CommentPosted(Result<(), ApiError>),
    /// Server-side cart listing fetched
    CartResult(Result<Vec<CartItem>, ApiError>),
    /// Voucher list fetched
    VouchersResult(Result<Vec<Voucher>, ApiError>),
    /// Splash delay elapsed; advance Loading → Login
    SplashElapsed,
}
