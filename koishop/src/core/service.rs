//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::ApiResult;
use async_trait::async_trait;
use shared::{Account, AccountPatch, AuthResponse, Blog, CartItem, Koi, Voucher};

/// Trait for remote shop API operations.
///
/// This trait allows for dependency injection and mocking in tests. Every
/// operation is at-most-once: no retries, no deduplication.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new user account
    async fn register(
        &self,
        email: String,
        password: String,
        phone: String,
        name: String,
        address: String,
    ) -> ApiResult<Account>;

    /// Login with email and password; persists the token on success
    async fn login(&self, email: String, password: String) -> ApiResult<AuthResponse>;

    /// Clear the persisted token and in-memory session (best-effort)
    async fn logout(&self);

    /// Fetch the authenticated user's account
    async fn fetch_account(&self) -> ApiResult<Account>;

    /// Send a partial account update; the server owns the merge
    async fn update_account(&self, patch: AccountPatch) -> ApiResult<()>;

    /// Change the account password
    async fn change_password(&self, old_password: String, new_password: String) -> ApiResult<()>;

    /// Fetch the full koi catalog
    async fn list_koi(&self) -> ApiResult<Vec<Koi>>;

    /// Fetch a single koi by id
    async fn get_koi(&self, id: &str) -> ApiResult<Koi>;

    /// Fetch the blog/post feed
    async fn list_blogs(&self) -> ApiResult<Vec<Blog>>;

    /// Fetch a single blog post by id
    async fn get_blog(&self, id: &str) -> ApiResult<Blog>;

    /// Post a comment on a koi (requires authentication)
    async fn post_comment(&self, koi_id: &str, rating: u8, content: String) -> ApiResult<()>;

    /// Fetch the server-side cart listing
    async fn fetch_cart(&self) -> ApiResult<Vec<CartItem>>;

    /// Fetch available discount vouchers
    async fn fetch_vouchers(&self) -> ApiResult<Vec<Voucher>>;
}
