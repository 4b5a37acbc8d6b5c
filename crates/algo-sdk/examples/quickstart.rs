//! Minimal end-to-end example: create a project, deploy it, poll the
//! deployment.
//!
//! Run with:
//! ```sh
//! ALGO_API_KEY=... cargo run --example quickstart
//! ```

use algo_sdk::{Client, ProjectCreateParams, ProjectListParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::from_env()?;

    let project = client
        .projects()
        .create(
            ProjectCreateParams::builder()
                .name("quickstart")
                .description("Created by the Rust SDK quickstart example")
                .build()?,
        )
        .await?;
    println!("created project #{} ({})", project.id, project.name);

    let deployment = client.projects().deploy(project.id).await?;
    println!("deployment #{} is {}", deployment.id, deployment.status);

    let page = client
        .projects()
        .list(ProjectListParams {
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    println!("you now have {} project(s) on this page", page.items.len());

    Ok(())
}
