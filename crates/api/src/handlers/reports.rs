//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;

use fieldwork_core::access::{authorize, Operation};
use fieldwork_db::models::report::ReportSummary;
use fieldwork_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/summary (any role)
///
/// Aggregate order counts per status and priority plus the mean completion
/// time in hours.
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ReportSummary>>> {
    authorize(&user.role, Operation::ViewReports)?;

    let report = ReportRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: report }))
}
