//! Billing API endpoints

use http::Method;
use serde_json::Value;

use super::Resource;
use crate::{client::Client, error::Result};

/// Billing API resource.
#[derive(Clone)]
pub struct Billing {
    client: Client,
}

impl Billing {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get billing information, optionally bounded to a date window
    /// (ISO 8601 dates). Absent bounds are omitted from the query.
    pub async fn get(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value> {
        self.client
            .request(Method::GET, "/billing")?
            .query_opt("start_date", start_date)
            .query_opt("end_date", end_date)
            .send()
            .await?
            .data()
    }
}

impl Resource for Billing {
    fn client(&self) -> &Client {
        &self.client
    }
}
