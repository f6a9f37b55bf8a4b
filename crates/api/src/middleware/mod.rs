//! HTTP middleware components.

pub mod auth;
