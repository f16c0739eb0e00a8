//! # Koi Catalog Endpoints
//!
//! Read-only catalog access plus comment posting.

use super::client::ApiClient;
use crate::core::error::{ApiError, ApiResult};
use crate::utils::validation::validate_rating;
use shared::{Koi, NewCommentRequest};

/// Fetch the full koi catalog.
#[tracing::instrument(skip(client))]
pub async fn list_koi(client: &ApiClient) -> ApiResult<Vec<Koi>> {
    let start = std::time::Instant::now();
    let result: ApiResult<Vec<Koi>> =
        ApiClient::execute_json(client.client.get(client.url("/fish"))).await;

    if let Ok(list) = &result {
        tracing::info!(
            count = list.len(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched koi catalog"
        );
    }
    result
}

/// Fetch a single koi by id. Unknown ids come back as `NotFound`.
pub async fn get_koi(client: &ApiClient, id: &str) -> ApiResult<Koi> {
    ApiClient::execute_json(client.client.get(client.url(&format!("/fish/{}", id)))).await
}

/// Post a comment on a koi.
///
/// Client-side preconditions are checked before any network call is made:
/// rating in 1..=5, non-empty content, caller authenticated. The
/// one-comment-per-koi policy is enforced (when enabled) at the screen
/// handler, which has the current user and the loaded comment list.
pub async fn post_comment(
    client: &ApiClient,
    koi_id: &str,
    rating: u8,
    content: String,
) -> ApiResult<()> {
    let check = validate_rating(rating);
    if !check.is_valid {
        return Err(ApiError::Validation(
            check.error.unwrap_or_else(|| "invalid rating".to_string()),
        ));
    }
    if content.trim().is_empty() {
        return Err(ApiError::Validation("comment content is required".to_string()));
    }

    let body = NewCommentRequest { rating, content };
    let request = client.authed(
        client
            .client
            .post(client.url(&format!("/fish/{}/comment", koi_id)))
            .json(&body),
    )?;

    tracing::info!(koi_id = %koi_id, rating = rating, "Posting comment");
    ApiClient::execute_empty(request).await
}
