//! # Authentication Endpoints
//!
//! Registration, login, and logout. Login is the one operation with a side
//! effect beyond the remote call: on success the returned token is persisted
//! and armed on the session.

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::{Account, AuthResponse, LoginRequest, RegisterRequest};

/// Register a new user account.
pub async fn register(
    client: &ApiClient,
    email: String,
    password: String,
    phone: String,
    name: String,
    address: String,
) -> ApiResult<Account> {
    let request = RegisterRequest {
        email,
        password,
        phone,
        name,
        address,
    };

    ApiClient::execute_json(
        client
            .client
            .post(client.url("/auth/register"))
            .json(&request),
    )
    .await
}

/// Login with email and password.
///
/// On success the token is written to the session store and armed for
/// subsequent authenticated requests before the response is returned.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> ApiResult<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let result: ApiResult<AuthResponse> = ApiClient::execute_json(
        client
            .client
            .post(client.url("/auth/login"))
            .json(&request),
    )
    .await;

    match result {
        Ok(auth) => {
            client.session().establish(auth.token.clone()).await;
            tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
            Ok(auth)
        }
        Err(e) => {
            tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis(), "Login failed");
            Err(e)
        }
    }
}

/// Clear the persisted token and the armed session. Best-effort: never fails
/// fatally.
pub async fn logout(client: &ApiClient) {
    client.session().clear().await;
    tracing::info!("Session cleared");
}
