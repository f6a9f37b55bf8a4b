//! Repository for the `checkins` table: the check-in recorder.
//!
//! A check-in is field evidence tied to a work order. Creating one also
//! mirrors the note into the order's timeline as a `comment` event, in the
//! same transaction as the check-in insert.

use sqlx::PgPool;

use fieldwork_core::actor::Actor;
use fieldwork_core::timeline::{checkin_comment, TimelineEventType};
use fieldwork_core::types::DbId;

use crate::models::checkin::{Checkin, CreateCheckin};
use crate::models::timeline::NewTimelineEvent;
use crate::repositories::TimelineRepo;

/// Column list for `checkins` queries.
const COLUMNS: &str =
    "id, workorder_id, user_id, note, latitude, longitude, photo, created_at";

/// Create and read operations for check-ins.
pub struct CheckinRepo;

impl CheckinRepo {
    /// Record a check-in and mirror it into the order's timeline atomically.
    ///
    /// When both coordinates are present the mirrored comment carries a GPS
    /// suffix at five decimal places. Returns `None` when the work order does
    /// not exist (nothing is written).
    pub async fn create(
        pool: &PgPool,
        actor: &Actor,
        workorder_id: DbId,
        input: &CreateCheckin,
    ) -> Result<Option<Checkin>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM workorders WHERE id = $1)")
                .bind(workorder_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO checkins (workorder_id, user_id, note, latitude, longitude, photo)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let checkin = sqlx::query_as::<_, Checkin>(&query)
            .bind(workorder_id)
            .bind(actor.user_id)
            .bind(&input.note)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.photo)
            .fetch_one(&mut *tx)
            .await?;

        let description = checkin_comment(&checkin.note, checkin.latitude, checkin.longitude);
        TimelineRepo::append(
            &mut tx,
            workorder_id,
            &NewTimelineEvent::attributed(TimelineEventType::Comment, description, actor),
        )
        .await?;

        tx.commit().await?;
        tracing::debug!(
            checkin_id = checkin.id,
            order_id = workorder_id,
            user_id = actor.user_id,
            has_gps = checkin.latitude.is_some(),
            "Check-in row created"
        );
        Ok(Some(checkin))
    }

    /// List check-ins for one work order, newest first.
    pub async fn list_by_workorder(
        pool: &PgPool,
        workorder_id: DbId,
    ) -> Result<Vec<Checkin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkins
             WHERE workorder_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Checkin>(&query)
            .bind(workorder_id)
            .fetch_all(pool)
            .await
    }

    /// List all check-ins across orders, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Checkin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkins ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Checkin>(&query).fetch_all(pool).await
    }
}
