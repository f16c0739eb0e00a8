//! # Shared Data Transfer Objects
//!
//! This library defines the wire contract between the koi shop client and the
//! remote HTTP API. All DTOs use JSON serialization via `serde`.
//!
//! ## Wire Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Optional fields**: omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Unknown fields**: tolerated on deserialization so the client keeps
//!   working when the server adds data
//!
//! ## Module Organization
//!
//! - [`dto::auth`] - Login/registration requests and responses
//! - [`dto::account`] - User account record and partial update patch
//! - [`dto::koi`] - Koi catalog entities and comments
//! - [`dto::blog`] - Blog/post entities
//! - [`dto::cart`] - Cart line items and discount vouchers

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::account::{Account, AccountPatch, ChangePasswordRequest};
pub use dto::auth::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest};
pub use dto::blog::Blog;
pub use dto::cart::{CartItem, Voucher};
pub use dto::koi::{Comment, Koi, KoiType, NewCommentRequest, UserRef};
