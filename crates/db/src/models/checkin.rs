//! Check-in entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldwork_core::types::{DbId, Timestamp};

/// Check-in row from the `checkins` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    pub id: DbId,
    pub workorder_id: DbId,
    pub user_id: Option<DbId>,
    pub note: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Opaque encoded blob reference (e.g. a base64 data URL).
    pub photo: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a check-in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckin {
    pub note: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
}
