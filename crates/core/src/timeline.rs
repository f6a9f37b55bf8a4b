//! Timeline event vocabulary and description/metadata composition.
//!
//! Every state-changing operation on a work order appends exactly one event
//! per observable change. The human-readable descriptions and the structured
//! metadata payloads are composed here so the persistence layer never
//! hand-rolls event text.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::workorder::WorkorderStatus;

/// Kind of timeline event. Maps to the `timeline_event_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "timeline_event_type", rename_all = "snake_case")]
pub enum TimelineEventType {
    Created,
    StatusChange,
    Assigned,
    Comment,
}

impl TimelineEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineEventType::Created => "created",
            TimelineEventType::StatusChange => "status_change",
            TimelineEventType::Assigned => "assigned",
            TimelineEventType::Comment => "comment",
        }
    }
}

impl fmt::Display for TimelineEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description for the `created` event every work order starts with.
pub const CREATED_DESCRIPTION: &str = "Work order created";

/// Description for an `assigned` event.
pub fn assigned_description(assignee: &str) -> String {
    format!("Assigned to {assignee}")
}

/// Description for a `status_change` event.
pub fn status_change_description(status: WorkorderStatus) -> String {
    format!("Status changed to {status}")
}

/// Comment description mirrored into the timeline by a check-in.
///
/// When both coordinates are present the note is suffixed with the GPS
/// position at five decimal places; otherwise the note is used verbatim.
pub fn checkin_comment(note: &str, latitude: Option<f64>, longitude: Option<f64>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => format!("{note} (GPS: {lat:.5}, {lon:.5})"),
        _ => note.to_string(),
    }
}

/// Metadata payload carrying the resulting status (`created` and the initial
/// `status_change` event on creation).
pub fn status_metadata(status: WorkorderStatus) -> serde_json::Value {
    json!({ "status": status })
}

/// Metadata payload for a transition (`status_change` and `assigned` events
/// produced by updates).
pub fn transition_metadata<F, T>(from: F, to: T) -> serde_json::Value
where
    F: Serialize,
    T: Serialize,
{
    json!({ "from": from, "to": to })
}
