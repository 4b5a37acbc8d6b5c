//! Files API endpoints
//!
//! File entries vary by server version and by whether the path is a file or
//! a directory listing, so payloads are surfaced as raw JSON values.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use super::Resource;
use crate::{client::Client, error::Result};

/// Files API resource. All operations are scoped to a project.
#[derive(Clone)]
pub struct Files {
    client: Client,
}

impl Files {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn endpoint(path: &str) -> String {
        format!("/files/{}", path.trim_start_matches('/'))
    }

    /// Read a file or list a directory.
    pub async fn read(&self, path: &str, project_id: &str) -> Result<Value> {
        self.client
            .request(Method::GET, &Self::endpoint(path))?
            .query("projectId", project_id)
            .send()
            .await?
            .data()
    }

    /// Create a file with the given content, or a directory when
    /// `directory` is true.
    pub async fn create(
        &self,
        path: &str,
        project_id: &str,
        content: &str,
        directory: bool,
    ) -> Result<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateBody<'a> {
            project_id: &'a str,
            content: &'a str,
            directory: bool,
        }

        self.client
            .request(Method::POST, &Self::endpoint(path))?
            .json(&CreateBody {
                project_id,
                content,
                directory,
            })?
            .send()
            .await?
            .data()
    }

    /// Replace a file's content.
    pub async fn update(&self, path: &str, project_id: &str, content: &str) -> Result<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateBody<'a> {
            project_id: &'a str,
            content: &'a str,
        }

        self.client
            .request(Method::PUT, &Self::endpoint(path))?
            .json(&UpdateBody {
                project_id,
                content,
            })?
            .send()
            .await?
            .data()
    }

    /// Delete a file or directory.
    ///
    /// The server answers with either an empty 204 or a confirmation
    /// envelope; both are accepted.
    pub async fn delete(&self, path: &str, project_id: &str) -> Result<()> {
        self.client
            .request(Method::DELETE, &Self::endpoint(path))?
            .query("projectId", project_id)
            .send()
            .await?
            .optional_data::<Value>()?;
        Ok(())
    }
}

impl Resource for Files {
    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_leading_slash() {
        assert_eq!(Files::endpoint("src/main.rs"), "/files/src/main.rs");
        assert_eq!(Files::endpoint("/src/main.rs"), "/files/src/main.rs");
    }
}
