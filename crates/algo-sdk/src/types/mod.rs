//! Core types for the Algo API
//!
//! Data records returned by the API plus the explicit parameter structs used
//! for create/update operations. Update parameters are typed patch structs
//! with independently settable optional fields; unset fields are omitted from
//! the serialized body entirely.

// Re-export commonly used types from submodules
pub use ai::*;
pub use deployment::*;
pub use pagination::*;
pub use project::*;
pub use user::*;
pub use webhook::*;

// Submodules
pub mod ai;
pub mod deployment;
pub mod pagination;
pub mod project;
pub mod user;
pub mod webhook;

pub(crate) fn default_true() -> bool {
    true
}
