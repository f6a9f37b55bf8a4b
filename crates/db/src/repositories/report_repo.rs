//! Aggregate queries over stored work orders for the reports endpoint.

use sqlx::PgPool;

use fieldwork_core::workorder::{WorkorderPriority, WorkorderStatus};

use crate::models::report::{PriorityCount, ReportSummary, StatusCount};

/// Read-only aggregation over the `workorders` table.
pub struct ReportRepo;

impl ReportRepo {
    /// Summary counts: total, per-status, per-priority, and the mean hours
    /// from creation to completion over completed orders.
    ///
    /// Buckets with no orders are reported with a zero count so clients get
    /// a stable shape.
    pub async fn summary(pool: &PgPool) -> Result<ReportSummary, sqlx::Error> {
        let status_rows: Vec<(WorkorderStatus, i64)> = sqlx::query_as(
            "SELECT status, COUNT(*)::BIGINT FROM workorders GROUP BY status",
        )
        .fetch_all(pool)
        .await?;

        let priority_rows: Vec<(WorkorderPriority, i64)> = sqlx::query_as(
            "SELECT priority, COUNT(*)::BIGINT FROM workorders GROUP BY priority",
        )
        .fetch_all(pool)
        .await?;

        let average_completion_hours: f64 = sqlx::query_scalar(
            "SELECT COALESCE(
                 AVG(EXTRACT(EPOCH FROM (completed_at - created_at)) / 3600.0),
                 0
             )::DOUBLE PRECISION
             FROM workorders
             WHERE completed_at IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;

        let count_for_status = |status: WorkorderStatus| {
            status_rows
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };
        let count_for_priority = |priority: WorkorderPriority| {
            priority_rows
                .iter()
                .find(|(p, _)| *p == priority)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        let orders_by_status: Vec<StatusCount> = [
            WorkorderStatus::Pending,
            WorkorderStatus::InProgress,
            WorkorderStatus::Completed,
            WorkorderStatus::Cancelled,
        ]
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: count_for_status(status),
        })
        .collect();

        let orders_by_priority: Vec<PriorityCount> = [
            WorkorderPriority::Low,
            WorkorderPriority::Medium,
            WorkorderPriority::High,
            WorkorderPriority::Urgent,
        ]
        .into_iter()
        .map(|priority| PriorityCount {
            priority,
            count: count_for_priority(priority),
        })
        .collect();

        let total_orders = orders_by_status.iter().map(|c| c.count).sum();

        Ok(ReportSummary {
            total_orders,
            orders_by_status,
            orders_by_priority,
            average_completion_hours,
        })
    }
}
