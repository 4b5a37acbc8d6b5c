//! Webhook types

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::default_true;

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique identifier
    pub id: u64,

    /// Owning user id
    pub user_id: u64,

    /// Project scope, if the webhook is project-specific
    #[serde(default)]
    pub project_id: Option<u64>,

    /// Delivery URL
    pub url: String,

    /// Subscribed event names
    pub events: Vec<String>,

    /// Whether the webhook is active
    #[serde(default = "default_true")]
    pub active: bool,

    /// When the webhook was created
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a webhook.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct WebhookCreateParams {
    /// Delivery URL
    pub url: String,

    /// Event names to subscribe to
    pub events: Vec<String>,

    /// Optional project scope
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Optional signing secret
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl WebhookCreateParams {
    /// Create a builder for webhook creation parameters.
    pub fn builder() -> WebhookCreateParamsBuilder {
        WebhookCreateParamsBuilder::default()
    }
}

/// Patch for updating a webhook; unset fields are omitted from the request.
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct WebhookPatch {
    /// New delivery URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Replacement event list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Enable or disable delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl WebhookPatch {
    /// Create a builder for a webhook patch.
    pub fn builder() -> WebhookPatchBuilder {
        WebhookPatchBuilder::default()
    }
}

/// Query parameters for listing webhooks.
#[derive(Debug, Clone, Default)]
pub struct WebhookListParams {
    /// Page number (1-based; server default 1)
    pub page: Option<u32>,
    /// Page size (server default 20)
    pub limit: Option<u32>,
    /// Restrict to webhooks scoped to this project
    pub project_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_defaults_to_true() {
        let webhook: Webhook = serde_json::from_str(
            r#"{"id": 1, "user_id": 2, "url": "https://hooks.example.com",
                "events": ["project.deployed"],
                "created_at": "2024-01-15T10:00:00Z"}"#,
        )
        .unwrap();

        assert!(webhook.active);
    }

    #[test]
    fn test_patch_toggle_active_only() {
        let patch = WebhookPatch::builder().active(false).build().unwrap();
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"active": false}));
    }
}
