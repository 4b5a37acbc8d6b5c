//! AI agents and ML models API endpoints

use std::sync::OnceLock;

use http::Method;
use serde_json::Value;

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Page,
    types::{AgentListParams, AiAgent, InvokeParams, MlModel, ModelListParams, PredictParams},
};

/// AI API resource, grouping agents and models.
pub struct Ai {
    client: Client,
    agents: OnceLock<AiAgents>,
    models: OnceLock<AiModels>,
}

impl Ai {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            agents: OnceLock::new(),
            models: OnceLock::new(),
        }
    }

    /// Access the AI agents endpoints.
    pub fn agents(&self) -> &AiAgents {
        self.agents
            .get_or_init(|| AiAgents::new(self.client.clone()))
    }

    /// Access the ML models endpoints.
    pub fn models(&self) -> &AiModels {
        self.models
            .get_or_init(|| AiModels::new(self.client.clone()))
    }
}

impl Resource for Ai {
    fn client(&self) -> &Client {
        &self.client
    }
}

/// AI agents API resource.
#[derive(Clone)]
pub struct AiAgents {
    client: Client,
}

impl AiAgents {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List AI agents with pagination.
    pub async fn list(&self, params: AgentListParams) -> Result<Page<AiAgent>> {
        self.client
            .request(Method::GET, "/ai/agents")?
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("category", params.category)
            .send()
            .await?
            .page()
    }

    /// Invoke an AI agent with the given input.
    pub async fn invoke(&self, agent_id: &str, params: InvokeParams) -> Result<Value> {
        self.client
            .request(Method::POST, &format!("/ai/agents/{agent_id}/invoke"))?
            .json(&params)?
            .send()
            .await?
            .data()
    }
}

impl Resource for AiAgents {
    fn client(&self) -> &Client {
        &self.client
    }
}

/// ML models API resource.
#[derive(Clone)]
pub struct AiModels {
    client: Client,
}

impl AiModels {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List ML models with pagination.
    pub async fn list(&self, params: ModelListParams) -> Result<Page<MlModel>> {
        self.client
            .request(Method::GET, "/ai/models")?
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("type", params.model_type)
            .send()
            .await?
            .page()
    }

    /// Run a model prediction with the given input.
    pub async fn predict(&self, model_id: &str, params: PredictParams) -> Result<Value> {
        self.client
            .request(Method::POST, &format!("/ai/models/{model_id}/predict"))?
            .json(&params)?
            .send()
            .await?
            .data()
    }
}

impl Resource for AiModels {
    fn client(&self) -> &Client {
        &self.client
    }
}
