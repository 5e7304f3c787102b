//! Shared vocabulary for the archiscape backend.
//!
//! This crate is IO-free: type aliases, the domain error enum, and
//! pagination helpers used by both the repository and API layers.

pub mod error;
pub mod pagination;
pub mod types;
