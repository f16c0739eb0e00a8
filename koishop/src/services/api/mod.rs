//! # Shop API Client Module
//!
//! HTTP client for the remote koi shop API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct and request/error plumbing
//! ├── auth.rs     - Registration, login, logout
//! ├── account.rs  - Profile fetch/update, password change
//! ├── koi.rs      - Koi catalog and comments
//! ├── blog.rs     - Blog feed and detail
//! └── cart.rs     - Cart listing and vouchers
//! ```

pub mod account;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod client;
pub mod koi;

pub use client::ApiClient;
