//! Deployment types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployment of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    /// Unique identifier
    pub id: u64,

    /// The deployed project
    pub project_id: u64,

    /// Deployment status (e.g. "pending", "running", "failed")
    pub status: String,

    /// Public URL once the deployment is live
    #[serde(default)]
    pub deployment_url: Option<String>,

    /// When the deployment was created
    pub created_at: DateTime<Utc>,

    /// When the deployment was last updated
    pub updated_at: DateTime<Utc>,

    /// When the deployment went live
    #[serde(default)]
    pub deployed_at: Option<DateTime<Utc>>,
}
