//! Platform resource usage and limits endpoints

use http::Method;
use serde_json::Value;

use super::Resource;
use crate::{client::Client, error::Result};

/// Query parameters for resource usage reports.
#[derive(Debug, Clone, Default)]
pub struct UsageQuery {
    /// Restrict the report to one project
    pub project_id: Option<u64>,
    /// Start of the reporting window (ISO 8601 date)
    pub start_date: Option<String>,
    /// End of the reporting window (ISO 8601 date)
    pub end_date: Option<String>,
}

/// Platform resources API (usage and limits).
#[derive(Clone)]
pub struct Resources {
    client: Client,
}

impl Resources {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get resource usage for the authenticated account.
    pub async fn usage(&self, query: UsageQuery) -> Result<Value> {
        self.client
            .request(Method::GET, "/resources/usage")?
            .query_opt("project_id", query.project_id)
            .query_opt("start_date", query.start_date)
            .query_opt("end_date", query.end_date)
            .send()
            .await?
            .data()
    }

    /// Get resource limits for the authenticated account.
    pub async fn limits(&self) -> Result<Value> {
        self.client
            .request(Method::GET, "/resources/limits")?
            .send()
            .await?
            .data()
    }
}

impl Resource for Resources {
    fn client(&self) -> &Client {
        &self.client
    }
}
