//! Handlers for the `/orders` resource: lifecycle mutations, listing, the
//! audit timeline, and free-form comments.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use fieldwork_core::access::{authorize, Operation};
use fieldwork_core::error::CoreError;
use fieldwork_core::types::DbId;
use fieldwork_core::workorder::{WorkorderPriority, WorkorderStatus};
use fieldwork_db::models::timeline::TimelineEvent;
use fieldwork_db::models::workorder::{
    CreateWorkorder, UpdateWorkorder, WorkorderDto, WorkorderFilter, WorkorderPage,
};
use fieldwork_db::repositories::{TimelineRepo, WorkorderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /orders`.
///
/// `status` and `priority` arrive as strings so an unknown value can be
/// rejected with a 400 instead of axum's generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for `POST /orders/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub note: String,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Work order",
        id,
    })
}

/// POST /api/v1/orders (admin)
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateWorkorder>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkorderDto>>)> {
    authorize(&user.role, Operation::CreateOrder)?;

    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if input.client_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Client name must not be empty".into(),
        )));
    }

    let order = WorkorderRepo::create(&state.pool, &user.to_actor(), &input).await?;
    tracing::info!(user_id = user.user_id, order_id = order.id, "Work order created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: order.into() }),
    ))
}

/// GET /api/v1/orders (any role)
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListOrdersQuery>,
) -> AppResult<Json<WorkorderPage>> {
    authorize(&user.role, Operation::ListOrders)?;

    let filter = build_filter(params)?;
    let (orders, total) = WorkorderRepo::find_all(&state.pool, &filter).await?;

    Ok(Json(WorkorderPage {
        orders: orders.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// GET /api/v1/orders/{id} (any role)
pub async fn get_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WorkorderDto>>> {
    authorize(&user.role, Operation::GetOrder)?;

    let order = WorkorderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: order.into() }))
}

/// PUT /api/v1/orders/{id} (admin, agent)
pub async fn update_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(patch): Json<UpdateWorkorder>,
) -> AppResult<Json<DataResponse<WorkorderDto>>> {
    authorize(&user.role, Operation::UpdateOrder)?;

    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Title must not be empty".into(),
            )));
        }
    }

    let order = WorkorderRepo::update(&state.pool, &user.to_actor(), id, &patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, order_id = id, "Work order updated");

    Ok(Json(DataResponse { data: order.into() }))
}

/// DELETE /api/v1/orders/{id} (admin)
pub async fn delete_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize(&user.role, Operation::DeleteOrder)?;

    let deleted = WorkorderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(user_id = user.user_id, order_id = id, "Work order deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/orders/{id}/timeline (any role)
pub async fn get_timeline(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TimelineEvent>>>> {
    authorize(&user.role, Operation::ViewTimeline)?;

    if !WorkorderRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }
    let events = TimelineRepo::list_for_order(&state.pool, id).await?;

    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/orders/{id}/comments (admin, agent)
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CommentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TimelineEvent>>)> {
    authorize(&user.role, Operation::AddComment)?;

    if input.note.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".into(),
        )));
    }

    let event = WorkorderRepo::add_comment(&state.pool, &user.to_actor(), id, &input.note)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, order_id = id, "Comment added");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: event }),
    ))
}

/// Translate query strings into a typed filter, rejecting unknown
/// status/priority values.
fn build_filter(params: ListOrdersQuery) -> Result<WorkorderFilter, AppError> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(WorkorderStatus::from_str)
        .transpose()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let priority = params
        .priority
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(WorkorderPriority::from_str)
        .transpose()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    Ok(WorkorderFilter {
        status,
        priority,
        search: params.search,
        page: params.page,
        limit: params.limit,
    })
}
