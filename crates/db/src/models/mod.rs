//! Row models and DTOs for the persistence layer.

pub mod checkin;
pub mod report;
pub mod timeline;
pub mod user;
pub mod workorder;
