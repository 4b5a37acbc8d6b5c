//! Deployments API endpoints

use http::Method;

use super::Resource;
use crate::{client::Client, error::Result, types::Deployment};

/// Deployments API resource.
#[derive(Clone)]
pub struct Deployments {
    client: Client,
}

impl Deployments {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a deployment's status.
    pub async fn get(&self, deployment_id: u64) -> Result<Deployment> {
        self.client
            .request(Method::GET, &format!("/deployments/{deployment_id}"))?
            .send()
            .await?
            .data()
    }

    /// Roll back a deployment to its previous version.
    pub async fn rollback(&self, deployment_id: u64) -> Result<Deployment> {
        self.client
            .request(
                Method::POST,
                &format!("/deployments/{deployment_id}/rollback"),
            )?
            .send()
            .await?
            .data()
    }
}

impl Resource for Deployments {
    fn client(&self) -> &Client {
        &self.client
    }
}
