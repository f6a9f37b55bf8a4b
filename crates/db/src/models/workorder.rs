//! Work order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldwork_core::types::{DbId, Timestamp};
use fieldwork_core::workorder::{WorkorderPriority, WorkorderStatus};

/// Work order row from the `workorders` table.
#[derive(Debug, Clone, FromRow)]
pub struct Workorder {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: WorkorderStatus,
    pub priority: WorkorderPriority,
    pub client_name: String,
    pub client_email: String,
    pub assigned_to: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Wire representation of a work order.
///
/// The id is serialized as a string and timestamps as ISO-8601; field names
/// are camelCase to match the dashboard and mobile clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkorderDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: WorkorderStatus,
    pub priority: WorkorderPriority,
    pub client_name: String,
    pub client_email: String,
    pub assigned_to: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl From<Workorder> for WorkorderDto {
    fn from(order: Workorder) -> Self {
        WorkorderDto {
            id: order.id.to_string(),
            title: order.title,
            description: order.description,
            status: order.status,
            priority: order.priority,
            client_name: order.client_name,
            client_email: order.client_email,
            assigned_to: order.assigned_to,
            created_at: order.created_at,
            updated_at: order.updated_at,
            completed_at: order.completed_at,
        }
    }
}

/// DTO for creating a work order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkorder {
    pub title: String,
    pub description: String,
    pub priority: WorkorderPriority,
    pub client_name: String,
    pub client_email: String,
    pub assigned_to: Option<String>,
    /// Defaults to `pending` when omitted.
    pub status: Option<WorkorderStatus>,
}

/// Patch DTO for updating a work order. Only present fields override the
/// stored values; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkorder {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<WorkorderPriority>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<WorkorderStatus>,
    /// Honored only when `status` is set to `completed` in the same patch.
    pub completed_at: Option<Timestamp>,
}

/// Filter and pagination parameters for listing work orders.
#[derive(Debug, Clone, Default)]
pub struct WorkorderFilter {
    pub status: Option<WorkorderStatus>,
    pub priority: Option<WorkorderPriority>,
    /// Case-insensitive substring match over title, client name, and email.
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Page of work orders plus the total count of matching rows.
#[derive(Debug, Serialize)]
pub struct WorkorderPage {
    pub orders: Vec<WorkorderDto>,
    pub total: i64,
}
