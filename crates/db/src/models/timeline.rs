//! Timeline event entity model (append-only, no update DTO).

use serde::Serialize;
use sqlx::FromRow;

use fieldwork_core::actor::Actor;
use fieldwork_core::timeline::TimelineEventType;
use fieldwork_core::types::{DbId, Timestamp};

/// A single immutable audit record from the `timeline_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: DbId,
    pub order_id: DbId,
    #[serde(rename = "type")]
    pub event_type: TimelineEventType,
    pub description: String,
    pub user_id: Option<DbId>,
    /// Snapshot of the actor's display name at event time; null for
    /// system-generated events.
    pub user_name: Option<String>,
    pub timestamp: Timestamp,
    pub metadata: Option<serde_json::Value>,
}

/// Payload for appending a timeline event. Id and timestamp are assigned by
/// the ledger (a caller-supplied timestamp override is permitted).
#[derive(Debug, Clone)]
pub struct NewTimelineEvent {
    pub event_type: TimelineEventType,
    pub description: String,
    pub user_id: Option<DbId>,
    pub user_name: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub timestamp: Option<Timestamp>,
}

impl NewTimelineEvent {
    /// Build an event attributed to `actor` (system attribution when the
    /// actor carries no identity).
    pub fn attributed(event_type: TimelineEventType, description: String, actor: &Actor) -> Self {
        NewTimelineEvent {
            event_type,
            description,
            user_id: actor.user_id,
            user_name: actor.display_name(),
            metadata: None,
            timestamp: None,
        }
    }

    /// Attach a structured metadata payload.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
