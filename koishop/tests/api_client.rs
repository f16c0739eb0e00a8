//! End-to-end tests for the HTTP API client against an in-process server
//! double. The double speaks the same wire format as the real backend and
//! asserts bearer-token propagation server-side.

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use koishop::config::ClientConfig;
use koishop::core::{ApiError, ApiService};
use koishop::services::api::ApiClient;
use koishop::services::session::MemorySessionStore;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const TEST_TOKEN: &str = "token-abc";

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Unauthorized"})),
    )
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

fn account_json() -> Value {
    json!({
        "id": "u1",
        "email": "linh@example.com",
        "name": "Linh",
        "phone": "0912345678",
        "address": "Hanoi",
        "role": "customer"
    })
}

fn router() -> Router {
    Router::new()
        .route(
            "/api/auth/register",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "taken@example.com" {
                    return (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"message": "Email already registered"})),
                    );
                }
                (StatusCode::CREATED, Json(account_json()))
            }),
        )
        .route(
            "/api/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "correct-horse" {
                    (StatusCode::OK, Json(json!({"token": TEST_TOKEN})))
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"message": "Invalid email or password"})),
                    )
                }
            }),
        )
        .route(
            "/api/auth/infoUser",
            get(|headers: HeaderMap| async move {
                if bearer_ok(&headers) {
                    (StatusCode::OK, Json(account_json()))
                } else {
                    unauthorized()
                }
            }),
        )
        .route(
            "/api/user/personal-information",
            put(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if !bearer_ok(&headers) {
                    return unauthorized();
                }
                // A patch must carry only the changed fields
                if body.get("name").is_some() && body.get("phone").is_none() {
                    (StatusCode::OK, Json(json!({})))
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"message": "Unexpected patch shape"})),
                    )
                }
            }),
        )
        .route(
            "/api/fish",
            get(|| async {
                Json(json!([
                    {"id": "k1", "name": "Kohaku A", "price": 2_500_000u64, "category": "F1 Hybrid"},
                    {"id": "k2", "name": "Showa B", "price": 1_200_000u64, "category": "Purebred"}
                ]))
            }),
        )
        .route(
            "/api/fish/:id",
            get(|Path(id): Path<String>| async move {
                if id == "k1" {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "id": "k1",
                            "name": "Kohaku A",
                            "price": 2_500_000u64,
                            "koiType": {"id": "t1", "name": "Kohaku", "origin": "Japan"},
                            "comments": [
                                {"id": "c1", "rating": 5, "content": "Beautiful", "author": {"id": "u9", "name": "Mai"}}
                            ]
                        })),
                    )
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"message": "Fish not found"})),
                    )
                }
            }),
        )
        .route(
            "/api/fish/:id/comment",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if !bearer_ok(&headers) {
                    return unauthorized();
                }
                if body["rating"].as_u64().map(|r| (1..=5).contains(&r)) != Some(true) {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"message": "Rating out of range"})),
                    );
                }
                (StatusCode::CREATED, Json(json!({})))
            }),
        )
        .route(
            "/api/cart",
            get(|headers: HeaderMap| async move {
                if bearer_ok(&headers) {
                    (
                        StatusCode::OK,
                        Json(json!([
                            {"id": "c1", "fishId": "k1", "name": "Kohaku A", "price": 2_500_000u64}
                        ])),
                    )
                } else {
                    unauthorized()
                }
            }),
        )
        .route(
            "/api/vouchers",
            get(|| async {
                Json(json!([
                    {"id": "v1", "code": "KOI50", "discountPercentage": 50, "maxDiscount": 100_000u64}
                ]))
            }),
        )
}

/// A router whose catalog endpoint never answers within a sane deadline.
fn slow_router() -> Router {
    Router::new().route(
        "/api/fish",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    )
}

/// Spawn a server double and return a client pointed at it.
async fn spawn_client(app: Router, timeout: Duration) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let config = ClientConfig {
        base_url: format!("http://{}/api", addr),
        timeout,
        single_comment_per_koi: true,
    };
    ApiClient::new(&config, Arc::new(MemorySessionStore::new()))
}

async fn client() -> ApiClient {
    spawn_client(router(), Duration::from_secs(10)).await
}

#[tokio::test]
async fn register_then_login_establishes_session() {
    let client = client().await;

    let account = client
        .register(
            "linh@example.com".to_string(),
            "correct-horse".to_string(),
            "0912345678".to_string(),
            "Linh".to_string(),
            "Hanoi".to_string(),
        )
        .await
        .expect("register succeeds");
    assert_eq!(account.email, "linh@example.com");

    // Registration alone does not log the user in
    assert!(!client.session().is_authenticated());

    let auth = client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");
    assert_eq!(auth.token, TEST_TOKEN);
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn bearer_token_reaches_the_server() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");

    // The server double only answers infoUser for the exact bearer header
    let account = client.fetch_account().await.expect("account fetch succeeds");
    assert_eq!(account.id, "u1");
}

#[tokio::test]
async fn invalid_credentials_map_to_auth_error_with_server_message() {
    let client = client().await;
    let err = client
        .login("linh@example.com".to_string(), "wrong".to_string())
        .await
        .expect_err("login should fail");

    match err {
        ApiError::Auth(msg) => assert_eq!(msg, "Invalid email or password"),
        other => panic!("expected Auth, got {:?}", other),
    }
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn duplicate_email_maps_to_validation_error() {
    let client = client().await;
    let err = client
        .register(
            "taken@example.com".to_string(),
            "pw-longenough".to_string(),
            "0912345678".to_string(),
            "Linh".to_string(),
            "Hanoi".to_string(),
        )
        .await
        .expect_err("register should fail");

    match err {
        ApiError::Validation(msg) => assert_eq!(msg, "Email already registered"),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_koi_maps_to_not_found() {
    let client = client().await;
    let err = client.get_koi("nope").await.expect_err("should 404");

    match err {
        ApiError::NotFound(msg) => assert_eq!(msg, "Fish not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn catalog_and_detail_deserialize() {
    let client = client().await;

    let list = client.list_koi().await.expect("list succeeds");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "k1");
    assert_eq!(list[1].price, 1_200_000);

    let koi = client.get_koi("k1").await.expect("detail succeeds");
    assert_eq!(koi.koi_type.name, "Kohaku");
    assert_eq!(koi.comments.len(), 1);
    assert_eq!(koi.comments[0].author.name, "Mai");
}

#[tokio::test]
async fn authed_endpoints_fail_locally_when_anonymous() {
    let client = client().await;

    // No round trip happens; the client rejects before sending
    let err = client.fetch_account().await.expect_err("should fail");
    assert!(matches!(err, ApiError::Auth(_)));

    let err = client
        .post_comment("k1", 5, "Lovely".to_string())
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn logout_returns_client_to_anonymous() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");
    assert!(client.session().is_authenticated());

    client.logout().await;
    assert!(!client.session().is_authenticated());

    let err = client.fetch_cart().await.expect_err("should fail");
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn comment_posts_with_valid_input() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");

    client
        .post_comment("k1", 4, "Great colors".to_string())
        .await
        .expect("comment succeeds");
}

#[tokio::test]
async fn invalid_rating_never_reaches_the_server() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");

    for rating in [0u8, 6] {
        let err = client
            .post_comment("k1", rating, "text".to_string())
            .await
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Validation(_)), "rating {}", rating);
    }
}

#[tokio::test]
async fn account_patch_sends_only_changed_fields() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");

    // The server double rejects patches carrying unexpected fields
    let patch = shared::AccountPatch {
        name: Some("Linh Updated".to_string()),
        ..Default::default()
    };
    client.update_account(patch).await.expect("update succeeds");
}

#[tokio::test]
async fn cart_and_vouchers_deserialize() {
    let client = client().await;
    client
        .login("linh@example.com".to_string(), "correct-horse".to_string())
        .await
        .expect("login succeeds");

    let cart = client.fetch_cart().await.expect("cart succeeds");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].fish_id, "k1");

    let vouchers = client.fetch_vouchers().await.expect("vouchers succeed");
    assert_eq!(vouchers[0].code, "KOI50");
    assert_eq!(vouchers[0].apply(1_000_000), 900_000);
}

#[tokio::test]
async fn slow_server_surfaces_timeout() {
    let client = spawn_client(slow_router(), Duration::from_millis(300)).await;

    let start = std::time::Instant::now();
    let err = client.list_koi().await.expect_err("should time out");

    // Timeout is its own category, distinct from Network
    assert!(matches!(err, ApiError::Timeout(_)), "got {:?}", err);
    assert!(start.elapsed() < Duration::from_secs(3));
}
