//! # Account Endpoints
//!
//! Authenticated user profile operations.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::{Account, AccountPatch, ChangePasswordRequest};

/// Fetch the authenticated user's account record.
///
/// An `Auth` error here means the token is absent or was rejected; the screen
/// layer maps that to "clear session and redirect to login".
#[tracing::instrument(skip(client))]
pub async fn fetch_account(client: &ApiClient) -> ApiResult<Account> {
    let request = client.authed(client.client.get(client.url("/auth/infoUser")))?;
    ApiClient::execute_json(request).await
}

/// Send a partial profile update. Only changed fields are serialized; the
/// server owns the merge.
pub async fn update_account(client: &ApiClient, patch: AccountPatch) -> ApiResult<()> {
    if patch.is_empty() {
        tracing::debug!("Empty account patch, skipping request");
        return Ok(());
    }

    let request = client.authed(
        client
            .client
            .put(client.url("/user/personal-information"))
            .json(&patch),
    )?;
    ApiClient::execute_empty(request).await
}

/// Change the account password. The caller pre-validates that the new
/// password matches its confirmation; mismatch rules on the old password are
/// the server's and come back as `Validation`.
pub async fn change_password(
    client: &ApiClient,
    old_password: String,
    new_password: String,
) -> ApiResult<()> {
    let body = ChangePasswordRequest {
        old_password,
        new_password,
    };
    let request = client.authed(
        client
            .client
            .put(client.url("/user/change-password"))
            .json(&body),
    )?;
    ApiClient::execute_empty(request).await
}
