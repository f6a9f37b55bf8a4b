//! HTTP-level integration tests for the auth endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user_with_role, get, get_auth, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, _token) = create_user_with_role(&pool, "maria", "agent").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "maria", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "maria");
    assert_eq!(json["user"]["role"], "agent");
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_with_email(pool: PgPool) {
    create_user_with_role(&pool, "maria", "agent").await;
    let app = common::build_test_app(pool);

    let body =
        serde_json::json!({ "username": "MARIA@test.com", "password": "test_password_123!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK, "email login is case-insensitive");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user_with_role(&pool, "maria", "agent").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "maria", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_profile(pool: PgPool) {
    let (user, token) = create_user_with_role(&pool, "pedro", "viewer").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["username"], "pedro");
    assert_eq!(json["data"]["role"], "viewer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_without_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
