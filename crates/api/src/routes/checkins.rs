//! Route definitions for the `/checkins` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checkin;
use crate::state::AppState;

/// Routes mounted at `/checkins`.
///
/// ```text
/// GET  /                            -> all check-ins (admin)
/// POST /{workorder_id}              -> create check-in (admin, agent)
/// GET  /workorder/{workorder_id}    -> check-ins for one order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(checkin::list_all))
        .route("/{workorder_id}", post(checkin::create_checkin))
        .route(
            "/workorder/{workorder_id}",
            get(checkin::list_for_workorder),
        )
}
