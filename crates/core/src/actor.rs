//! The authenticated identity performing an operation.
//!
//! An [`Actor`] is used for timeline event attribution only; authorization
//! decisions are made separately against the role table in [`crate::access`].

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Identity snapshot attached to state-changing operations.
///
/// A fully-`None` actor represents a system-generated action (e.g. startup
/// bootstrap); timeline events it produces carry null `user_id`/`user_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: Option<DbId>,
    pub username: Option<String>,
    pub name: Option<String>,
}

impl Actor {
    /// The system actor (no user attribution).
    pub fn system() -> Self {
        Self::default()
    }

    /// Display name snapshot for timeline events: the full name when known,
    /// falling back to the username.
    pub fn display_name(&self) -> Option<String> {
        self.name.clone().or_else(|| self.username.clone())
    }
}
