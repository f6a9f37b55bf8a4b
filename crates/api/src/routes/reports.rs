//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /summary -> aggregate counts and completion time
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(reports::summary))
}
