mod common;

use axum::{middleware, Router};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use webmention_receiver::api::middleware::auth;
use webmention_receiver::api::routes::protected_routes;
use webmention_receiver::AppState;

fn admin_app(state: AppState) -> TestServer {
    let api = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let app = Router::new().nest("/api", api).with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_admin_requires_bearer_token(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server.get("/api/domains").await;
    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Unauthorized");

    let response = server
        .get("/api/domains")
        .authorization_bearer("wrong-token")
        .await;
    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_create_domain_returns_instructions(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/domains")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "domain": "HTTPS://Blog.Example.com/some/path" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["domain"]["domain"], "blog.example.com");
    assert_eq!(body["domain"]["list_type"], "whitelist");
    assert_eq!(body["domain"]["verified"], false);

    let token = body["domain"]["verification_token"].as_str().unwrap();
    assert!(!token.is_empty());

    let meta = body["instructions"]["meta"].as_str().unwrap();
    assert!(meta.contains("webmentions-verification"));
    assert!(meta.contains(token));

    let link = body["instructions"]["link"].as_str().unwrap();
    assert!(link.contains("webmentions-verification"));
    assert!(link.contains(token));
}

#[sqlx::test]
async fn test_create_domain_rejects_empty(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/domains")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "domain": "https://" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid domain");
}

#[sqlx::test]
async fn test_create_domain_duplicate_conflict(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    server
        .post("/api/domains")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "domain": "blog.example.com" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/domains")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "domain": "blog.example.com", "list_type": "blacklist" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Domain already exists");
}

#[sqlx::test]
async fn test_list_domains_with_filter(pool: PgPool) {
    common::create_whitelist_domain(&pool, "a.example", true).await;
    common::create_blacklist_domain(&pool, "b.example").await;

    let server = admin_app(common::create_test_state(pool));

    let response = server
        .get("/api/domains")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["domains"].as_array().unwrap().len(), 2);

    let response = server
        .get("/api/domains")
        .add_query_param("list_type", "blacklist")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;

    let body = response.json::<serde_json::Value>();
    let domains = body["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0]["domain"], "b.example");
}

#[sqlx::test]
async fn test_delete_domain(pool: PgPool) {
    let id = common::create_whitelist_domain(&pool, "a.example", false).await;

    let server = admin_app(common::create_test_state(pool));

    let response = server
        .delete(&format!("/api/domains/{id}"))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["deleted"], true);

    let response = server
        .delete(&format!("/api/domains/{id}"))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_verify_rejects_blacklist_entry(pool: PgPool) {
    let id = common::create_blacklist_domain(&pool, "spam.example").await;

    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post(&format!("/api/domains/{id}/verify"))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Only whitelist domains are verified");
}

#[sqlx::test]
async fn test_verify_unknown_domain(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/domains/9999/verify")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_block_rule_crud(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/block-rules")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({
            "domain_pattern": "*.spam.example",
            "pattern_kind": "suffix",
            "label": "spam farm"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let rule_id = body["rule"]["id"].as_i64().unwrap();
    assert_eq!(body["rule"]["domain_pattern"], "*.spam.example");
    assert_eq!(body["rule"]["label"], "spam farm");

    let response = server
        .get("/api/block-rules")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["rules"].as_array().unwrap().len(), 1);

    let response = server
        .delete(&format!("/api/block-rules/{rule_id}"))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/block-rules")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;

    let body = response.json::<serde_json::Value>();
    assert!(body["rules"].as_array().unwrap().is_empty());
}

#[sqlx::test]
async fn test_block_rule_requires_a_clause(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/block-rules")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "label": "label only" }))
        .await;

    response.assert_status_bad_request();

    // a pattern without a kind does not count as a clause
    let response = server
        .post("/api/block-rules")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "domain_pattern": "spam.example" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_settings_roundtrip(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .get("/api/settings")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["webmention_mode"], "admit_all");

    let response = server
        .patch("/api/settings")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "webmention_mode": "whitelist_only" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["webmention_mode"], "whitelist_only");

    let response = server
        .patch("/api/settings")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "webmention_mode": "everything" }))
        .await;
    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_claim_pending_batches(pool: PgPool) {
    for i in 0..7 {
        common::create_pending_mention(
            &pool,
            &format!("https://a.example/{i}"),
            "https://localhost/1",
        )
        .await;
    }

    let server = admin_app(common::create_test_state(pool.clone()));

    // default batch size is 5
    let response = server
        .post("/api/pending/claim")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["mentions"].as_array().unwrap().len(), 5);

    let response = server
        .post("/api/pending/claim")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "max": 100 }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["mentions"].as_array().unwrap().len(), 2);

    assert_eq!(common::count_unprocessed_pending(&pool).await, 0);
}

#[sqlx::test]
async fn test_claim_pending_rejects_non_positive_max(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/pending/claim")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "max": 0 }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_store_and_list_mentions(pool: PgPool) {
    let server = admin_app(common::create_test_state(pool));

    let response = server
        .post("/api/mentions")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({
            "source": "https://a.example/reply",
            "target": "https://localhost/1",
            "type": "in-reply-to"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["type"], "in-reply-to");

    let response = server
        .post("/api/mentions")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({
            "source": "https://a.example/reply",
            "target": "https://localhost/1",
            "type": "frowny-face"
        }))
        .await;

    response.assert_status_bad_request();

    let response = server
        .get("/api/mentions")
        .add_query_param("target", "https://localhost/1")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["mentions"].as_array().unwrap().len(), 1);
}
