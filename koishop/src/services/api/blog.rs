//! # Blog Endpoints

use super::client::ApiClient;
use crate::core::error::ApiResult;
use shared::Blog;

/// Fetch the blog/post feed.
pub async fn list_blogs(client: &ApiClient) -> ApiResult<Vec<Blog>> {
    ApiClient::execute_json(client.client.get(client.url("/post"))).await
}

/// Fetch a single blog post by id.
pub async fn get_blog(client: &ApiClient, id: &str) -> ApiResult<Blog> {
    ApiClient::execute_json(client.client.get(client.url(&format!("/post/{}", id)))).await
}
