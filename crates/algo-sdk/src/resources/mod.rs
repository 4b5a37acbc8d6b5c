//! API resource endpoints
//!
//! This module contains the implementation of all API endpoints, organized by
//! resource family. Resources are pure call-sites: each builds a path, query
//! and body, delegates to the transport, and decodes the success envelope.
//! They carry no retry or error logic of their own; failures propagate
//! unchanged.

pub mod ai;
pub mod billing;
pub mod deployments;
pub mod files;
pub mod projects;
pub mod usage;
pub mod users;
pub mod webhooks;

pub use ai::{Ai, AiAgents, AiModels};
pub use billing::Billing;
pub use deployments::Deployments;
pub use files::Files;
pub use projects::Projects;
pub use usage::{Resources, UsageQuery};
pub use users::Users;
pub use webhooks::Webhooks;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}
