//! Repository for the `workorders` table: the work order lifecycle engine.
//!
//! Every mutation that changes observable state appends the matching timeline
//! events through [`TimelineRepo`] inside the same transaction, so an order
//! write can never land without its audit record (and vice versa).

use chrono::Utc;
use sqlx::PgPool;

use fieldwork_core::actor::Actor;
use fieldwork_core::pagination::{clamp_limit, clamp_page, offset};
use fieldwork_core::timeline::{
    self, TimelineEventType, CREATED_DESCRIPTION,
};
use fieldwork_core::types::DbId;
use fieldwork_core::workorder::{WorkorderPriority, WorkorderStatus};

use crate::models::timeline::{NewTimelineEvent, TimelineEvent};
use crate::models::workorder::{CreateWorkorder, UpdateWorkorder, Workorder, WorkorderFilter};
use crate::repositories::TimelineRepo;

/// Column list for `workorders` queries.
const COLUMNS: &str = "\
    id, title, description, status, priority, client_name, client_email, \
    assigned_to, created_at, updated_at, completed_at";

/// Lifecycle operations for work orders.
pub struct WorkorderRepo;

impl WorkorderRepo {
    /// Create a work order and its initial timeline events atomically.
    ///
    /// Always appends a `created` event; additionally an `assigned` event
    /// when the order starts out assigned, and a `status_change` event when
    /// the initial status is not `pending`.
    pub async fn create(
        pool: &PgPool,
        actor: &Actor,
        input: &CreateWorkorder,
    ) -> Result<Workorder, sqlx::Error> {
        let status = input.status.unwrap_or(WorkorderStatus::Pending);
        let completed_at = (status == WorkorderStatus::Completed).then(Utc::now);

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO workorders
                (title, description, status, priority, client_name, client_email,
                 assigned_to, completed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Workorder>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(status)
            .bind(input.priority)
            .bind(&input.client_name)
            .bind(&input.client_email)
            .bind(&input.assigned_to)
            .bind(completed_at)
            .fetch_one(&mut *tx)
            .await?;

        TimelineRepo::append(
            &mut tx,
            order.id,
            &NewTimelineEvent::attributed(
                TimelineEventType::Created,
                CREATED_DESCRIPTION.to_string(),
                actor,
            )
            .with_metadata(timeline::status_metadata(order.status)),
        )
        .await?;

        if let Some(assignee) = &order.assigned_to {
            TimelineRepo::append(
                &mut tx,
                order.id,
                &NewTimelineEvent::attributed(
                    TimelineEventType::Assigned,
                    timeline::assigned_description(assignee),
                    actor,
                ),
            )
            .await?;
        }

        if order.status != WorkorderStatus::Pending {
            TimelineRepo::append(
                &mut tx,
                order.id,
                &NewTimelineEvent::attributed(
                    TimelineEventType::StatusChange,
                    timeline::status_change_description(order.status),
                    actor,
                )
                .with_metadata(timeline::status_metadata(order.status)),
            )
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            order_id = order.id,
            status = %order.status,
            user_id = actor.user_id,
            "Work order row created"
        );
        Ok(order)
    }

    /// List work orders with optional filters, newest first, plus the total
    /// count of matching rows (pre-pagination).
    pub async fn find_all(
        pool: &PgPool,
        filter: &WorkorderFilter,
    ) -> Result<(Vec<Workorder>, i64), sqlx::Error> {
        let page = clamp_page(filter.page);
        let limit = clamp_limit(filter.limit);

        let (where_clause, binds, next_idx) = build_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM workorders {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${next_idx} OFFSET ${}",
            next_idx + 1
        );
        let orders = bind_filter_values(sqlx::query_as::<_, Workorder>(&query), &binds)
            .bind(limit)
            .bind(offset(page, limit))
            .fetch_all(pool)
            .await?;

        let count_query =
            format!("SELECT COUNT(*)::BIGINT FROM workorders {where_clause}");
        let total = bind_filter_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &binds)
            .fetch_one(pool)
            .await?;

        Ok((orders, total))
    }

    /// Find a work order by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workorder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workorders WHERE id = $1");
        sqlx::query_as::<_, Workorder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a work order with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM workorders WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update and record the resulting transitions atomically.
    ///
    /// Only fields present in the patch override stored values. Setting the
    /// status to `completed` stamps `completed_at` (patch-supplied or now);
    /// setting any other status clears it; leaving the status untouched
    /// leaves `completed_at` untouched. A changed status appends one
    /// `status_change` event with `{from, to}` metadata; a changed, non-empty
    /// assignee appends one `assigned` event likewise.
    ///
    /// Returns `None` when no order with this id exists (nothing is written).
    pub async fn update(
        pool: &PgPool,
        actor: &Actor,
        id: DbId,
        patch: &UpdateWorkorder,
    ) -> Result<Option<Workorder>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM workorders WHERE id = $1");
        let Some(existing) = sqlx::query_as::<_, Workorder>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let status = patch.status.unwrap_or(existing.status);
        let completed_at = match patch.status {
            Some(WorkorderStatus::Completed) => Some(patch.completed_at.unwrap_or_else(Utc::now)),
            Some(_) => None,
            None => existing.completed_at,
        };

        let query = format!(
            "UPDATE workorders SET
                title = $2,
                description = $3,
                status = $4,
                priority = $5,
                client_name = $6,
                client_email = $7,
                assigned_to = $8,
                completed_at = $9,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Workorder>(&query)
            .bind(id)
            .bind(patch.title.as_ref().unwrap_or(&existing.title))
            .bind(patch.description.as_ref().unwrap_or(&existing.description))
            .bind(status)
            .bind(patch.priority.unwrap_or(existing.priority))
            .bind(patch.client_name.as_ref().unwrap_or(&existing.client_name))
            .bind(patch.client_email.as_ref().unwrap_or(&existing.client_email))
            .bind(patch.assigned_to.as_ref().or(existing.assigned_to.as_ref()))
            .bind(completed_at)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(new_status) = patch.status {
            if new_status != existing.status {
                TimelineRepo::append(
                    &mut tx,
                    id,
                    &NewTimelineEvent::attributed(
                        TimelineEventType::StatusChange,
                        timeline::status_change_description(new_status),
                        actor,
                    )
                    .with_metadata(timeline::transition_metadata(existing.status, new_status)),
                )
                .await?;
            }
        }

        if let Some(assignee) = &patch.assigned_to {
            if !assignee.is_empty() && existing.assigned_to.as_deref() != Some(assignee.as_str()) {
                TimelineRepo::append(
                    &mut tx,
                    id,
                    &NewTimelineEvent::attributed(
                        TimelineEventType::Assigned,
                        timeline::assigned_description(assignee),
                        actor,
                    )
                    .with_metadata(timeline::transition_metadata(
                        existing.assigned_to.clone(),
                        assignee.clone(),
                    )),
                )
                .await?;
            }
        }

        tx.commit().await?;
        tracing::debug!(
            order_id = id,
            status = %updated.status,
            user_id = actor.user_id,
            "Work order row updated"
        );
        Ok(Some(updated))
    }

    /// Delete a work order. Returns `true` if a row was deleted.
    ///
    /// Timeline events and check-ins go with it via `ON DELETE CASCADE`; the
    /// existence check and the delete are the same statement, so there is no
    /// check-then-delete race.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workorders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(order_id = id, "Work order row deleted");
        }
        Ok(deleted)
    }

    /// Append a free-form comment to an order's timeline.
    ///
    /// The existence check and the append share one transaction. Returns
    /// `None` when the order does not exist.
    pub async fn add_comment(
        pool: &PgPool,
        actor: &Actor,
        order_id: DbId,
        note: &str,
    ) -> Result<Option<TimelineEvent>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM workorders WHERE id = $1)")
                .bind(order_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Ok(None);
        }

        let event = TimelineRepo::append(
            &mut tx,
            order_id,
            &NewTimelineEvent::attributed(TimelineEventType::Comment, note.to_string(), actor),
        )
        .await?;

        tx.commit().await?;
        Ok(Some(event))
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built work order queries.
enum BindValue {
    Status(WorkorderStatus),
    Priority(WorkorderPriority),
    Text(String),
}

/// Build a WHERE clause and bind values from the filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no filter is active, otherwise it starts with `WHERE `.
fn build_filter(filter: &WorkorderFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(status) = filter.status {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Status(status));
    }

    if let Some(priority) = filter.priority {
        conditions.push(format!("priority = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Priority(priority));
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        // One placeholder reused across the three searched columns.
        conditions.push(format!(
            "(title ILIKE ${bind_idx} OR client_name ILIKE ${bind_idx} OR client_email ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        binds.push(BindValue::Text(format!("%{search}%")));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in binds {
        match val {
            BindValue::Status(v) => q = q.bind(*v),
            BindValue::Priority(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_filter_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in binds {
        match val {
            BindValue::Status(v) => q = q.bind(*v),
            BindValue::Priority(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}
