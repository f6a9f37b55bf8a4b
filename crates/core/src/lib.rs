//! Domain vocabulary and pure logic for the fieldwork platform.
//!
//! No I/O lives here: this crate defines the shared type aliases, the error
//! taxonomy, role and authorization tables, the work order status/priority
//! vocabularies, and timeline event composition. The persistence gateway
//! (`fieldwork-db`) and the HTTP surface (`fieldwork-api`) both build on it.

pub mod access;
pub mod actor;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod timeline;
pub mod types;
pub mod workorder;
