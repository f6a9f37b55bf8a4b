//! Aggregate reporting DTOs.

use serde::Serialize;

use fieldwork_core::workorder::{WorkorderPriority, WorkorderStatus};

/// Count of orders in one status bucket.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: WorkorderStatus,
    pub count: i64,
}

/// Count of orders in one priority bucket.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityCount {
    pub priority: WorkorderPriority,
    pub count: i64,
}

/// Summary counts derived from the stored work orders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_orders: i64,
    pub orders_by_status: Vec<StatusCount>,
    pub orders_by_priority: Vec<PriorityCount>,
    /// Mean hours from creation to completion over completed orders;
    /// zero when no order has completed yet.
    pub average_completion_hours: f64,
}
