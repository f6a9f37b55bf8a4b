//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod checkin;
pub mod reports;
pub mod workorder;
