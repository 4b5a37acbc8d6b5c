//! Project types

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A project in the Algo platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: u64,

    /// Project name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Template the project was created from
    #[serde(default)]
    pub template: Option<String>,

    /// Visibility ("private" or "public")
    #[serde(default = "default_visibility")]
    pub visibility: String,

    /// Owning user id
    pub user_id: u64,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

fn default_visibility() -> String {
    "private".to_string()
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct ProjectCreateParams {
    /// Project name
    pub name: String,

    /// Optional description
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Template to create the project from
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Visibility ("private" or "public")
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl ProjectCreateParams {
    /// Create a builder for project creation parameters.
    pub fn builder() -> ProjectCreateParamsBuilder {
        ProjectCreateParamsBuilder::default()
    }
}

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectListParams {
    /// Page number (1-based; server default 1)
    pub page: Option<u32>,
    /// Page size (server default 20)
    pub limit: Option<u32>,
    /// Free-text search filter
    pub search: Option<String>,
}
