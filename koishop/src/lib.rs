//! # Koi Shop Client - Library Root
//!
//! The data-access and session layer of a koi shopping client. This library
//! crate contains all modules used by the binary crate (`main.rs`) and by
//! the integration tests.
//!
//! ## Features
//!
//! - **Canonical API Client**: one `reqwest` client per app, fixed base URL,
//!   bounded timeouts, typed error taxonomy
//! - **Session Management**: Anonymous ⇄ Authenticated state machine with a
//!   pluggable token store (in-memory or file-backed)
//! - **Guarded Navigation**: a single guard decides every route transition;
//!   protected screens redirect anonymous users to Login
//! - **Screen Contracts**: per-screen on-mount fetches with in-flight
//!   requests aborted when the screen is left
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              koishop (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  async-channel - Task → main-thread event pump         │
//! │  parking_lot   - Shared state locks                    │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!                        │ HTTP + Bearer token
//!                        ▼
//!              ┌─────────────────────┐
//!              │    Shop backend     │
//!              │  /auth /fish /post  │
//!              │  /cart /vouchers    │
//!              └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state machine, navigation, handlers, events
//! - **core**: error taxonomy and the `ApiService` trait
//! - **services**: the HTTP API client and the session/token store
//! - **config**: environment-backed client configuration
//! - **utils**: form validation helpers
//!
//! ## Shared Crate
//!
//! - `shared` - wire DTOs (accounts, koi, blogs, cart, vouchers)

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Route, RouteDecision, Screen};
pub use config::ClientConfig;
pub use core::{ApiError, ApiResult, ApiService};
