//! AI agent and ML model types

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::default_true;

/// An AI agent available on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAgent {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Agent category (e.g. "code-review")
    #[serde(default)]
    pub category: Option<String>,

    /// Agent version
    #[serde(default)]
    pub version: Option<String>,

    /// Whether the agent accepts invocations
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A machine learning model available on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlModel {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Model type (e.g. "classification")
    #[serde(rename = "type")]
    pub model_type: String,

    /// Model version
    #[serde(default)]
    pub version: Option<String>,

    /// Whether the model accepts predictions
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Parameters for invoking an AI agent.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct InvokeParams {
    /// Input payload handed to the agent
    pub input: Value,

    /// Optional invocation context
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Optional tuning parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl InvokeParams {
    /// Create a builder for agent invocation parameters.
    pub fn builder() -> InvokeParamsBuilder {
        InvokeParamsBuilder::default()
    }

    /// Invoke with input only.
    pub fn with_input(input: impl Into<Value>) -> Self {
        Self {
            input: input.into(),
            context: None,
            parameters: None,
        }
    }
}

/// Parameters for running a model prediction.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct PredictParams {
    /// Input payload handed to the model
    pub input: Value,

    /// Optional tuning parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl PredictParams {
    /// Create a builder for prediction parameters.
    pub fn builder() -> PredictParamsBuilder {
        PredictParamsBuilder::default()
    }

    /// Predict with input only.
    pub fn with_input(input: impl Into<Value>) -> Self {
        Self {
            input: input.into(),
            parameters: None,
        }
    }
}

/// Query parameters for listing AI agents.
#[derive(Debug, Clone, Default)]
pub struct AgentListParams {
    /// Page number (1-based; server default 1)
    pub page: Option<u32>,
    /// Page size (server default 20)
    pub limit: Option<u32>,
    /// Restrict to a category
    pub category: Option<String>,
}

/// Query parameters for listing ML models.
#[derive(Debug, Clone, Default)]
pub struct ModelListParams {
    /// Page number (1-based; server default 1)
    pub page: Option<u32>,
    /// Page size (server default 20)
    pub limit: Option<u32>,
    /// Restrict to a model type
    pub model_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_params_omit_unset_fields() {
        let params = InvokeParams::with_input(serde_json::json!({"text": "hi"}));
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"input": {"text": "hi"}}));
    }

    #[test]
    fn test_model_type_field_renamed() {
        let model: MlModel = serde_json::from_str(
            r#"{"id": "m1", "name": "spam", "type": "classification"}"#,
        )
        .unwrap();
        assert_eq!(model.model_type, "classification");
        assert!(model.active);
    }
}
