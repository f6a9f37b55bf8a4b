//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or a transaction connection) as the first argument. Mutations
//! that touch the timeline run inside a single transaction so the order write
//! and its audit events commit or roll back together.

pub mod checkin_repo;
pub mod report_repo;
pub mod timeline_repo;
pub mod user_repo;
pub mod workorder_repo;

pub use checkin_repo::CheckinRepo;
pub use report_repo::ReportRepo;
pub use timeline_repo::TimelineRepo;
pub use user_repo::UserRepo;
pub use workorder_repo::WorkorderRepo;
