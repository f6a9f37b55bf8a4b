//! Route definitions for the `/orders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workorder;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /                 -> list with filters/pagination
/// POST   /                 -> create (admin)
/// GET    /{id}             -> detail
/// PUT    /{id}             -> partial update (admin, agent)
/// DELETE /{id}             -> delete (admin)
/// GET    /{id}/timeline    -> chronological events
/// POST   /{id}/comments    -> append comment (admin, agent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(workorder::list_orders).post(workorder::create_order),
        )
        .route(
            "/{id}",
            get(workorder::get_order)
                .put(workorder::update_order)
                .delete(workorder::delete_order),
        )
        .route("/{id}/timeline", get(workorder::get_timeline))
        .route("/{id}/comments", post(workorder::add_comment))
}
