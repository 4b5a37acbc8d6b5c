//! Projects API endpoints

use http::Method;
use serde::Serialize;
use serde_json::Value;

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    http::Page,
    types::{Deployment, Project, ProjectCreateParams, ProjectListParams},
};

/// Projects API resource.
#[derive(Clone)]
pub struct Projects {
    client: Client,
}

impl Projects {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new project.
    pub async fn create(&self, params: ProjectCreateParams) -> Result<Project> {
        self.client
            .request(Method::POST, "/projects")?
            .json(&params)?
            .send()
            .await?
            .data()
    }

    /// Get a project by id.
    pub async fn get(&self, project_id: u64) -> Result<Project> {
        self.client
            .request(Method::GET, &format!("/projects/{project_id}"))?
            .send()
            .await?
            .data()
    }

    /// List projects with pagination.
    pub async fn list(&self, params: ProjectListParams) -> Result<Page<Project>> {
        self.client
            .request(Method::GET, "/projects")?
            .query_opt("page", params.page)
            .query_opt("limit", params.limit)
            .query_opt("search", params.search)
            .send()
            .await?
            .page()
    }

    /// Delete a project.
    ///
    /// The server answers with either an empty 204 or a confirmation
    /// envelope; both are accepted.
    pub async fn delete(&self, project_id: u64) -> Result<()> {
        self.client
            .request(Method::DELETE, &format!("/projects/{project_id}"))?
            .send()
            .await?
            .optional_data::<Value>()?;
        Ok(())
    }

    /// Deploy a project, returning the new deployment.
    pub async fn deploy(&self, project_id: u64) -> Result<Deployment> {
        self.client
            .request(Method::POST, &format!("/projects/{project_id}/deploy"))?
            .send()
            .await?
            .data()
    }

    /// Clone a project, optionally under a new name.
    pub async fn clone_project(&self, project_id: u64, name: Option<&str>) -> Result<Project> {
        #[derive(Serialize)]
        struct CloneBody<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
        }

        self.client
            .request(Method::POST, &format!("/projects/{project_id}/clone"))?
            .json(&CloneBody { name })?
            .send()
            .await?
            .data()
    }
}

impl Resource for Projects {
    fn client(&self) -> &Client {
        &self.client
    }
}
