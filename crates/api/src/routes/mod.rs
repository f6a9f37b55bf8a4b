pub mod auth;
pub mod checkins;
pub mod health;
pub mod orders;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             current user (requires auth)
///
/// /orders                              list, create
/// /orders/{id}                         get, update, delete
/// /orders/{id}/timeline                chronological events (GET)
/// /orders/{id}/comments                append comment (POST)
///
/// /checkins                            all check-ins (GET, admin)
/// /checkins/{workorder_id}             create check-in (POST)
/// /checkins/workorder/{workorder_id}   check-ins for one order (GET)
///
/// /reports/summary                     aggregate counts (GET)
/// ```
///
/// Role gating happens inside the handlers via the static authorization
/// table in `fieldwork_core::access`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/orders", orders::router())
        .nest("/checkins", checkins::router())
        .nest("/reports", reports::router())
}
