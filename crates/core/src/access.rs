//! Static role-based authorization table.
//!
//! Authorization is a single predicate over `(role, operation)` evaluated
//! once at each HTTP entry point, instead of per-route metadata scattered
//! across the surface. The engine itself never re-checks roles; it assumes
//! the check passed before it is invoked.

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_AGENT, ROLE_VIEWER};

/// Every role-gated operation exposed by the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateOrder,
    ListOrders,
    GetOrder,
    UpdateOrder,
    DeleteOrder,
    ViewTimeline,
    AddComment,
    CreateCheckin,
    ListOrderCheckins,
    ListAllCheckins,
    ViewReports,
}

const ADMIN_ONLY: &[&str] = &[ROLE_ADMIN];
const ADMIN_AGENT: &[&str] = &[ROLE_ADMIN, ROLE_AGENT];
const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_AGENT, ROLE_VIEWER];

/// Roles permitted to perform `operation`.
pub fn allowed_roles(operation: Operation) -> &'static [&'static str] {
    match operation {
        Operation::CreateOrder | Operation::DeleteOrder | Operation::ListAllCheckins => ADMIN_ONLY,
        Operation::UpdateOrder | Operation::AddComment | Operation::CreateCheckin => ADMIN_AGENT,
        Operation::ListOrders
        | Operation::GetOrder
        | Operation::ViewTimeline
        | Operation::ListOrderCheckins
        | Operation::ViewReports => ALL_ROLES,
    }
}

/// Whether `role` may perform `operation`.
pub fn is_allowed(role: &str, operation: Operation) -> bool {
    allowed_roles(operation).contains(&role)
}

/// Evaluate the policy, producing `Forbidden` on deny.
pub fn authorize(role: &str, operation: Operation) -> Result<(), CoreError> {
    if is_allowed(role, operation) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{role}' is not allowed to perform this operation"
        )))
    }
}
