//! Webhooks API endpoints

use http::Method;
use serde_json::Value;

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Page,
    types::{Webhook, WebhookCreateParams, WebhookListParams, WebhookPatch},
};

/// Webhooks API resource.
#[derive(Clone)]
pub struct Webhooks {
    client: Client,
}

impl Webhooks {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a webhook subscription.
    pub async fn create(&self, params: WebhookCreateParams) -> Result<Webhook> {
        self.client
            .request(Method::POST, "/webhooks")?
            .json(&params)?
            .send()
            .await?
            .data()
    }

    /// Get a webhook by id.
    pub async fn get(&self, webhook_id: u64) -> Result<Webhook> {
        self.client
            .request(Method::GET, &format!("/webhooks/{webhook_id}"))?
            .send()
            .await?
            .data()
    }

    /// List webhooks with pagination.
    pub async fn list(&self, params: WebhookListParams) -> Result<Page<Webhook>> {
        self.client
            .request(Method::GET, "/webhooks")?
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("project_id", params.project_id)
            .send()
            .await?
            .page()
    }

    /// Update a webhook with an explicit patch.
    pub async fn update(&self, webhook_id: u64, patch: WebhookPatch) -> Result<Webhook> {
        self.client
            .request(Method::PUT, &format!("/webhooks/{webhook_id}"))?
            .json(&patch)?
            .send()
            .await?
            .data()
    }

    /// Delete a webhook.
    ///
    /// The server answers with either an empty 204 or a confirmation
    /// envelope; both are accepted.
    pub async fn delete(&self, webhook_id: u64) -> Result<()> {
        self.client
            .request(Method::DELETE, &format!("/webhooks/{webhook_id}"))?
            .send()
            .await?
            .optional_data::<Value>()?;
        Ok(())
    }

    /// Get a webhook's delivery history.
    pub async fn deliveries(
        &self,
        webhook_id: u64,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        self.client
            .request(Method::GET, &format!("/webhooks/{webhook_id}/deliveries"))?
            .query_opt("page", page)
            .query_opt("limit", limit)
            .send()
            .await?
            .data()
    }
}

impl Resource for Webhooks {
    fn client(&self) -> &Client {
        &self.client
    }
}
