//! # Cart & Voucher Endpoints
//!
//! Server-side cart listing and discount vouchers. The discount calculation
//! itself is pure and lives on [`shared::Voucher`].

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::{CartItem, Voucher};

/// Fetch the server-side cart listing.
pub async fn fetch_cart(client: &ApiClient) -> ApiResult<Vec<CartItem>> {
    let request = client.authed(client.client.get(client.url("/cart")))?;
    ApiClient::execute_json(request).await
}

/// Fetch available discount vouchers.
pub async fn fetch_vouchers(client: &ApiClient) -> ApiResult<Vec<Voucher>> {
    ApiClient::execute_json(client.client.get(client.url("/vouchers"))).await
}
