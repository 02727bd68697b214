//! Integration tests for the backend client against a mock server.

use std::time::Duration;

use post_desk::backend::SupabaseClient;
use post_desk::config::Config;
use post_desk::posts::{Draft, PostRepository};
use post_desk::session::SessionAccessor;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> SupabaseClient {
    let config = Config {
        supabase_url: server.uri(),
        ..Config::for_testing()
    };
    SupabaseClient::new(&config).expect("Failed to create client")
}

fn post_row(id: &str, content: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "content": content,
        "images": ["https://dl.dropbox.com/a.png"],
        "video_urls": null,
        "created_at": created_at,
        "user_id": "u-1",
    })
}

#[tokio::test]
async fn test_list_sends_owner_filter_and_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("select", "*"))
        .and(query_param("user_id", "eq.u-1"))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", "test-anon-key"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_row("p2", "newer", "2024-05-02T10:00:00+00:00"),
            post_row("p1", "older", "2024-05-01T10:00:00.123456+00:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("user-jwt".to_string()));
    let posts = client.list_owned_by("u-1").await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "p2");
    assert_eq!(posts[0].owner, "u-1");
    assert_eq!(posts[0].images, vec!["https://dl.dropbox.com/a.png".to_string()]);
    assert!(posts[0].video_urls.is_empty());
    assert_eq!(posts[1].content, "older");
}

#[tokio::test]
async fn test_anonymous_requests_use_anon_key_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(header("authorization", "Bearer test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(None);
    let posts = client.list_owned_by("u-1").await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_create_inserts_row_with_owner() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "content": "hello",
            "images": ["https://x/img.png"],
            "video_urls": [],
            "user_id": "u-1",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("user-jwt".to_string()));
    let draft = Draft {
        content: "hello".to_string(),
        images: vec!["https://x/img.png".to_string()],
        video_urls: Vec::new(),
    };
    client.create(&draft, "u-1").await.unwrap();
}

#[tokio::test]
async fn test_update_patches_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/posts"))
        .and(query_param("id", "eq.p1"))
        .and(body_json(json!({
            "content": "edited",
            "images": [],
            "video_urls": ["https://x/v.mp4"],
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("user-jwt".to_string()));
    let draft = Draft {
        content: "edited".to_string(),
        images: Vec::new(),
        video_urls: vec!["https://x/v.mp4".to_string()],
    };
    client.update("p1", &draft).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/posts"))
        .and(query_param("id", "eq.p1"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("user-jwt".to_string()));
    client.delete("p1").await.unwrap();
}

#[tokio::test]
async fn test_row_level_rejection_becomes_backend_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "new row violates row-level security policy for table \"posts\"",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("other-user-jwt".to_string()));
    let err = client.update("p1", &Draft::text("mine now")).await.unwrap_err();

    assert_eq!(err.status, Some(403));
    assert!(err.message.contains("row-level security"));
}

#[tokio::test]
async fn test_unreachable_backend_has_no_status() {
    let client = SupabaseClient::with_settings(
        "http://127.0.0.1:9",
        "anon",
        "posts",
        Duration::from_secs(2),
    )
    .unwrap()
    .for_user(Some("user-jwt".to_string()));

    let err = client.delete("p1").await.unwrap_err();
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn test_current_user_without_token_skips_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(None);
    assert_eq!(client.current_user().await, None);
}

#[tokio::test]
async fn test_current_user_resolves_identity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer user-jwt"))
        .and(header("apikey", "test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "aud": "authenticated",
            "email": "ana@example.com",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("user-jwt".to_string()));
    let user = client.current_user().await.unwrap();

    assert_eq!(user.id, "u-1");
    assert_eq!(user.email.as_deref(), Some("ana@example.com"));
}

#[tokio::test]
async fn test_current_user_with_expired_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "msg": "invalid JWT: token is expired",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server).for_user(Some("stale-jwt".to_string()));
    assert_eq!(client.current_user().await, None);
}

#[tokio::test]
async fn test_sign_in_with_password() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "test-anon-key"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "password": "hunter22",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "u-1", "email": "ana@example.com" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let session = client
        .sign_in_with_password("ana@example.com", "hunter22")
        .await
        .unwrap();

    assert_eq!(session.access_token, "fresh-jwt");
    assert_eq!(session.expires_in, 3600);
    assert_eq!(session.user.id, "u-1");
}

#[tokio::test]
async fn test_sign_in_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials",
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .sign_in_with_password("ana@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(400));
    assert_eq!(err.message, "Invalid login credentials");
}

#[tokio::test]
async fn test_sign_out_revokes_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).sign_out("user-jwt").await;
}
