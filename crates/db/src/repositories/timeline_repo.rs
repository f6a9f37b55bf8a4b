//! Repository for the `timeline_events` table.
//!
//! The table is append-only: this module exposes exactly one write path
//! ([`TimelineRepo::append`]) and no update or delete. All appends are driven
//! by the work order and check-in repositories so every state change leaves
//! an audit record in the same transaction.

use sqlx::{PgConnection, PgPool};

use fieldwork_core::types::DbId;

use crate::models::timeline::{NewTimelineEvent, TimelineEvent};

/// Column list for `timeline_events` queries.
const COLUMNS: &str =
    "id, order_id, event_type, description, user_id, user_name, timestamp, metadata";

/// Append and read operations for the per-order audit timeline.
pub struct TimelineRepo;

impl TimelineRepo {
    /// Append one event, returning the stored row.
    ///
    /// Takes a plain connection so callers can pass the pool or, for
    /// multi-write mutations, the connection of an open transaction. The
    /// timestamp defaults to the database clock unless the event carries an
    /// override.
    pub async fn append(
        conn: &mut PgConnection,
        order_id: DbId,
        event: &NewTimelineEvent,
    ) -> Result<TimelineEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_events
                (order_id, event_type, description, user_id, user_name, metadata, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, now()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(order_id)
            .bind(event.event_type)
            .bind(&event.description)
            .bind(event.user_id)
            .bind(&event.user_name)
            .bind(&event.metadata)
            .bind(event.timestamp)
            .fetch_one(conn)
            .await
    }

    /// List all events for an order, oldest first.
    ///
    /// Ties on the timestamp keep insertion order via the id column.
    pub async fn list_for_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<TimelineEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timeline_events
             WHERE order_id = $1
             ORDER BY timestamp ASC, id ASC"
        );
        sqlx::query_as::<_, TimelineEvent>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }
}
