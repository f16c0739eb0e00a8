//! # API Client
//!
//! Main HTTP client for shop API communication.

use crate::config::ClientConfig;
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::ApiService;
use crate::services::session::{Session, SessionStore};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;
use std::sync::Arc;

/// HTTP client for the remote shop API.
///
/// One fixed base URL, JSON bodies, and a finite per-request timeout so a
/// dead server can never pin a screen's loading state indefinitely. The
/// bearer token is owned by the [`Session`] on this instance rather than a
/// process-wide default header, so two clients never share auth state.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client with the given configuration and session store.
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(Session::new(store)),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token to a request, or fail up front when the
    /// session is Anonymous. Authenticated endpoints reject unauthenticated
    /// calls locally instead of burning a round trip.
    pub(crate) fn authed(&self, request: RequestBuilder) -> ApiResult<RequestBuilder> {
        match self.session.token() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(ApiError::Auth("not logged in".to_string())),
        }
    }

    /// Normalize a non-success HTTP response into an [`ApiError`].
    ///
    /// The message prefers the server's structured `message` field; when the
    /// body is unparseable a generic description of the status is used.
    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("request failed with status {}", status));

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Auth(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            s if s.is_client_error() => ApiError::Validation(message),
            _ => ApiError::Server(message),
        }
    }

    /// Send a request and parse a JSON success body.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(ApiError::from)?;
        if response.status().is_success() {
            response.json::<T>().await.map_err(ApiError::from)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Send a request, discarding any success body.
    pub(crate) async fn execute_empty(request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await.map_err(ApiError::from)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(
        &self,
        email: String,
        password: String,
        phone: String,
        name: String,
        address: String,
    ) -> ApiResult<shared::Account> {
        crate::services::api::auth::register(self, email, password, phone, name, address).await
    }

    async fn login(&self, email: String, password: String) -> ApiResult<shared::AuthResponse> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn logout(&self) {
        crate::services::api::auth::logout(self).await
    }

    async fn fetch_account(&self) -> ApiResult<shared::Account> {
        crate::services::api::account::fetch_account(self).await
    }

    async fn update_account(&self, patch: shared::AccountPatch) -> ApiResult<()> {
        crate::services::api::account::update_account(self, patch).await
    }

    async fn change_password(&self, old_password: String, new_password: String) -> ApiResult<()> {
        crate::services::api::account::change_password(self, old_password, new_password).await
    }

    async fn list_koi(&self) -> ApiResult<Vec<shared::Koi>> {
        crate::services::api::koi::list_koi(self).await
    }

    async fn get_koi(&self, id: &str) -> ApiResult<shared::Koi> {
        crate::services::api::koi::get_koi(self, id).await
    }

    async fn list_blogs(&self) -> ApiResult<Vec<shared::Blog>> {
        crate::services::api::blog::list_blogs(self).await
    }

    async fn get_blog(&self, id: &str) -> ApiResult<shared::Blog> {
        crate::services::api::blog::get_blog(self, id).await
    }

    async fn post_comment(&self, koi_id: &str, rating: u8, content: String) -> ApiResult<()> {
        crate::services::api::koi::post_comment(self, koi_id, rating, content).await
    }

    async fn fetch_cart(&self) -> ApiResult<Vec<shared::CartItem>> {
        crate::services::api::cart::fetch_cart(self).await
    }

    async fn fetch_vouchers(&self) -> ApiResult<Vec<shared::Voucher>> {
        crate::services::api::cart::fetch_vouchers(self).await
    }
}
