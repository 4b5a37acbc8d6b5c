//! Users API endpoints

use http::Method;
use serde_json::Value;

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Page,
    types::{User, UserCreateParams, UserListParams, UserPatch},
};

/// Users API resource.
#[derive(Clone)]
pub struct Users {
    client: Client,
}

impl Users {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new user.
    pub async fn create(&self, params: UserCreateParams) -> Result<User> {
        self.client
            .request(Method::POST, "/users")?
            .json(&params)?
            .send()
            .await?
            .data()
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: u64) -> Result<User> {
        self.client
            .request(Method::GET, &format!("/users/{user_id}"))?
            .send()
            .await?
            .data()
    }

    /// Update a user with an explicit patch.
    pub async fn update(&self, user_id: u64, patch: UserPatch) -> Result<User> {
        self.client
            .request(Method::PUT, &format!("/users/{user_id}"))?
            .json(&patch)?
            .send()
            .await?
            .data()
    }

    /// Delete a user.
    ///
    /// The server answers with either an empty 204 or a confirmation
    /// envelope; both are accepted.
    pub async fn delete(&self, user_id: u64) -> Result<()> {
        self.client
            .request(Method::DELETE, &format!("/users/{user_id}"))?
            .send()
            .await?
            .optional_data::<Value>()?;
        Ok(())
    }

    /// List users with pagination.
    pub async fn list(&self, params: UserListParams) -> Result<Page<User>> {
        self.client
            .request(Method::GET, "/users")?
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("search", params.search)
            .send()
            .await?
            .page()
    }
}

impl Resource for Users {
    fn client(&self) -> &Client {
        &self.client
    }
}
