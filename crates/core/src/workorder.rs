//! Work order status and priority vocabularies.
//!
//! Both enums map to PostgreSQL enum types of the same name (see the
//! `fieldwork-db` migrations) and serialize as their lowercase snake_case
//! names on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a work order.
///
/// Any status may transition to any other status; the engine records the
/// transition in the timeline but does not restrict it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "workorder_status", rename_all = "snake_case")]
pub enum WorkorderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl WorkorderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkorderStatus::Pending => "pending",
            WorkorderStatus::InProgress => "in_progress",
            WorkorderStatus::Completed => "completed",
            WorkorderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for WorkorderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkorderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(WorkorderStatus::Pending),
            "in_progress" => Ok(WorkorderStatus::InProgress),
            "completed" => Ok(WorkorderStatus::Completed),
            "cancelled" => Ok(WorkorderStatus::Cancelled),
            other => Err(format!("Unknown work order status: {other}")),
        }
    }
}

/// Priority of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "workorder_priority", rename_all = "snake_case")]
pub enum WorkorderPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl WorkorderPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkorderPriority::Low => "low",
            WorkorderPriority::Medium => "medium",
            WorkorderPriority::High => "high",
            WorkorderPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for WorkorderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkorderPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(WorkorderPriority::Low),
            "medium" => Ok(WorkorderPriority::Medium),
            "high" => Ok(WorkorderPriority::High),
            "urgent" => Ok(WorkorderPriority::Urgent),
            other => Err(format!("Unknown work order priority: {other}")),
        }
    }
}
