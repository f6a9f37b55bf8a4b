//! Handlers for the `/checkins` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fieldwork_core::access::{authorize, Operation};
use fieldwork_core::error::CoreError;
use fieldwork_core::types::DbId;
use fieldwork_db::models::checkin::{Checkin, CreateCheckin};
use fieldwork_db::repositories::{CheckinRepo, WorkorderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn order_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Work order",
        id,
    })
}

/// POST /api/v1/checkins/{workorder_id} (admin, agent)
///
/// Record a field check-in against a work order. The note is mirrored into
/// the order's timeline with a GPS suffix when coordinates are present.
pub async fn create_checkin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(workorder_id): Path<DbId>,
    Json(input): Json<CreateCheckin>,
) -> AppResult<(StatusCode, Json<DataResponse<Checkin>>)> {
    authorize(&user.role, Operation::CreateCheckin)?;

    if input.note.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Note must not be empty".into(),
        )));
    }
    if input.latitude.is_some() != input.longitude.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Latitude and longitude must be provided together".into(),
        )));
    }

    let checkin = CheckinRepo::create(&state.pool, &user.to_actor(), workorder_id, &input)
        .await?
        .ok_or_else(|| order_not_found(workorder_id))?;
    tracing::info!(
        user_id = user.user_id,
        order_id = workorder_id,
        checkin_id = checkin.id,
        "Check-in recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: checkin }),
    ))
}

/// GET /api/v1/checkins/workorder/{workorder_id} (any role)
pub async fn list_for_workorder(
    State(state): State<AppState>,
    user: AuthUser,
    Path(workorder_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Checkin>>>> {
    authorize(&user.role, Operation::ListOrderCheckins)?;

    if !WorkorderRepo::exists(&state.pool, workorder_id).await? {
        return Err(order_not_found(workorder_id));
    }
    let checkins = CheckinRepo::list_by_workorder(&state.pool, workorder_id).await?;

    Ok(Json(DataResponse { data: checkins }))
}

/// GET /api/v1/checkins (admin)
pub async fn list_all(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Checkin>>>> {
    authorize(&user.role, Operation::ListAllCheckins)?;

    let checkins = CheckinRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: checkins }))
}
