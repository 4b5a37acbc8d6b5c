//! # Algo SDK
//!
//! Rust SDK for the Algo Cloud IDE Platform API supporting:
//! - Users, projects, files, deployments and webhooks
//! - Platform resource usage, limits and billing
//! - AI agents and ML models (invoke / predict)
//! - Automatic retries with exponential backoff for transient failures
//! - Bearer-token authentication injected on every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use algo_sdk::{Client, ProjectCreateParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key");
//!
//!     let project = client.projects()
//!         .create(ProjectCreateParams::builder()
//!             .name("hello-world")
//!             .description("My first project")
//!             .build()?)
//!         .await?;
//!
//!     println!("created project {}", project.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use http::{Envelope, Page, Response};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use algo_sdk::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, Result,
        http::{Envelope, Page},
        types::{
            AiAgent, Deployment, MlModel, Pagination, Project, ProjectCreateParams, User,
            UserCreateParams, Webhook, WebhookCreateParams,
        },
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api/v1";
