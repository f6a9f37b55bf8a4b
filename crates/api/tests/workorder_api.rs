//! HTTP-level integration tests for the work order endpoints, including role
//! gating and the audit timeline.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_user_with_role, delete_auth, get_auth, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

fn order_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Instalação de ar condicionado",
        "description": "Split 12k BTU, sala de reuniões",
        "priority": "high",
        "clientName": "Empresa ABC Ltda",
        "clientEmail": "contato@abc.com"
    })
}

/// Create an order through the API as admin, returning its id.
async fn create_order(pool: &PgPool, admin_token: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/orders", admin_token, order_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().parse().unwrap()
}

// ---------------------------------------------------------------------------
// CRUD flow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_returns_dto(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(app, "/api/v1/orders", &token, order_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].is_string(), "id is serialized as a string");
    assert_eq!(data["status"], "pending");
    assert_eq!(data["priority"], "high");
    assert_eq!(data["clientName"], "Empresa ABC Ltda");
    assert!(data["completedAt"].is_null());
    assert!(data["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_order_and_timeline(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;
    let order_id = create_order(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/orders/{order_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], order_id.to_string());

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/orders/{order_id}/timeline"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "created");
    assert_eq!(events[0]["description"], "Work order created");
    assert_eq!(events[0]["userName"], "Test admin1");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_status_creates_timeline_event(pool: PgPool) {
    let (_admin, admin_token) = create_user_with_role(&pool, "admin1", "admin").await;
    let (_agent, agent_token) = create_user_with_role(&pool, "agent1", "agent").await;
    let order_id = create_order(&pool, &admin_token).await;

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({ "status": "completed" });
    let response =
        put_json_auth(app, &format!("/api/v1/orders/{order_id}"), &agent_token, patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "completed");
    assert!(json["data"]["completedAt"].is_string());

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/orders/{order_id}/timeline"),
        &agent_token,
    )
    .await;
    let json = body_json(response).await;
    let events = json["data"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["type"], "status_change");
    assert_eq!(events[1]["metadata"]["from"], "pending");
    assert_eq!(events[1]["metadata"]["to"], "completed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_order(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;
    let order_id = create_order(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/orders/{order_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/orders/{order_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_order_returns_404(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/orders/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/v1/orders/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_appends_to_timeline(pool: PgPool) {
    let (_admin, admin_token) = create_user_with_role(&pool, "admin1", "admin").await;
    let (_agent, agent_token) = create_user_with_role(&pool, "agent1", "agent").await;
    let order_id = create_order(&pool, &admin_token).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "note": "Cliente remarcou para sexta" });
    let response = post_json_auth(
        app,
        &format!("/api/v1/orders/{order_id}/comments"),
        &agent_token,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "comment");
    assert_eq!(json["data"]["description"], "Cliente remarcou para sexta");
    assert_eq!(json["data"]["userName"], "Test agent1");
}

// ---------------------------------------------------------------------------
// Listing and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_with_filters_and_pagination(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;
    for _ in 0..3 {
        let id = create_order(&pool, &token).await;
        let app = common::build_test_app(pool.clone());
        let patch = serde_json::json!({ "status": "completed" });
        put_json_auth(app, &format!("/api/v1/orders/{id}"), &token, patch).await;
    }
    create_order(&pool, &token).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/orders?status=completed&limit=1", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["orders"].as_array().unwrap().len(), 1);
    assert_eq!(json["total"], 3);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders?search=empresa+abc", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 4, "search matches all seeded orders");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_unknown_status(pool: PgPool) {
    let (_admin, token) = create_user_with_role(&pool, "admin1", "admin").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders?status=paused", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Role gating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_viewer_is_read_only(pool: PgPool) {
    let (_admin, admin_token) = create_user_with_role(&pool, "admin1", "admin").await;
    let (_viewer, viewer_token) = create_user_with_role(&pool, "viewer1", "viewer").await;
    let order_id = create_order(&pool, &admin_token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/orders", &viewer_token, order_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let patch = serde_json::json!({ "status": "cancelled" });
    let response =
        put_json_auth(app, &format!("/api/v1/orders/{order_id}"), &viewer_token, patch).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/orders/{order_id}"), &viewer_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Reads still work.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/orders", &viewer_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_agent_cannot_create_or_delete(pool: PgPool) {
    let (_admin, admin_token) = create_user_with_role(&pool, "admin1", "admin").await;
    let (_agent, agent_token) = create_user_with_role(&pool, "agent1", "agent").await;
    let order_id = create_order(&pool, &admin_token).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/orders", &agent_token, order_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/orders/{order_id}"), &agent_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unauthenticated_requests_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/orders").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
