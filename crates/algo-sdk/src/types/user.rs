//! User types

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: u64,

    /// Email address
    pub email: String,

    /// Unique username
    pub username: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Last login timestamp
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Parameters for creating a user.
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct UserCreateParams {
    /// Email address
    pub email: String,

    /// Unique username
    pub username: String,

    /// Password
    pub password: String,

    /// Optional display name; omitted from the request when unset
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserCreateParams {
    /// Create a builder for user creation parameters.
    pub fn builder() -> UserCreateParamsBuilder {
        UserCreateParamsBuilder::default()
    }
}

/// Patch for updating a user. Every field is independently settable; unset
/// fields are left untouched server-side and omitted from the request body.
#[derive(Debug, Clone, Default, Serialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct UserPatch {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    /// Create a builder for a user patch.
    pub fn builder() -> UserPatchBuilder {
        UserPatchBuilder::default()
    }
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserListParams {
    /// Page number (1-based; server default 1)
    pub page: Option<u32>,
    /// Page size (server default 20)
    pub limit: Option<u32>,
    /// Free-text search filter
    pub search: Option<String>,
}
