// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Samples for the Parameter Manager API.
//!
//! Most samples use the global endpoint. Parameters in a specific location
//! must be managed through a client configured with the regional endpoint,
//! see [new_regional_client].

pub mod create_param;
pub mod create_param_version;
pub mod create_regional_param;
pub mod create_structured_param;
pub mod delete_param;
pub mod delete_param_version;
pub mod get_param;
pub mod get_param_version;
pub mod list_params;

use anyhow::Context;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::ParameterFormat;
use samples_test_utils::errors::{ignore_not_found, is_not_found};
use std::io::Write;

pub fn regional_endpoint(location_id: &str) -> String {
    format!("https://parametermanager.{location_id}.rep.googleapis.com")
}

/// Creates a client for the global Parameter Manager endpoint.
pub async fn new_client() -> anyhow::Result<ParameterManager> {
    let client = ParameterManager::builder()
        .with_tracing()
        .build()
        .await
        .context("failed to create client")?;
    Ok(client)
}

/// Creates a client for the Parameter Manager endpoint in `location_id`.
pub async fn new_regional_client(location_id: &str) -> anyhow::Result<ParameterManager> {
    let client = ParameterManager::builder()
        .with_endpoint(regional_endpoint(location_id))
        .with_tracing()
        .build()
        .await
        .context("failed to create client")?;
    Ok(client)
}

pub fn parameter_parent(project_id: &str, location_id: &str) -> String {
    format!("projects/{project_id}/locations/{location_id}")
}

pub fn parameter_name(project_id: &str, location_id: &str, parameter_id: &str) -> String {
    format!(
        "{}/parameters/{parameter_id}",
        parameter_parent(project_id, location_id)
    )
}

pub fn parameter_version_name(parameter: &str, version_id: &str) -> String {
    format!("{parameter}/versions/{version_id}")
}

/// Deletes a parameter and all its versions.
///
/// A parameter cannot be deleted while it has versions. Resources that are
/// already gone are not an error.
pub async fn cleanup_parameter(client: &ParameterManager, name: &str) -> anyhow::Result<()> {
    let mut versions = Vec::new();
    let mut items = client
        .list_parameter_versions()
        .set_parent(name)
        .by_item();
    while let Some(item) = items.next().await {
        match item {
            Ok(v) => versions.push(v.name),
            Err(e) if is_not_found(&e) => return Ok(()),
            Err(e) => return Err(e).context(format!("failed to list versions for {name}")),
        }
    }
    for version in versions {
        tracing::info!("deleting parameter version {version}");
        ignore_not_found(
            client
                .delete_parameter_version()
                .set_name(&version)
                .send()
                .await,
        )?;
    }
    tracing::info!("deleting parameter {name}");
    ignore_not_found(client.delete_parameter().set_name(name).send().await)?;
    Ok(())
}

/// Runs the Parameter Manager samples.
///
/// The name of each parameter is pushed into `parameters` before it is
/// created, the caller should clean them up even if this function fails.
pub async fn run_parameter_examples(
    w: &mut impl Write,
    client: &ParameterManager,
    regional_client: &ParameterManager,
    project_id: &str,
    location_id: &str,
    parameters: &mut Vec<String>,
) -> anyhow::Result<()> {
    use samples_test_utils::resource_names::{random_parameter_id, random_parameter_version_id};

    let id = random_parameter_id();
    parameters.push(parameter_name(project_id, "global", &id));
    tracing::info!("running create_param example");
    create_param::sample(w, client, project_id, &id).await?;
    tracing::info!("running get_param example");
    get_param::sample(w, client, project_id, &id).await?;
    tracing::info!("running list_params example");
    list_params::sample(w, client, project_id).await?;

    let version_id = random_parameter_version_id();
    tracing::info!("running create_param_version example");
    create_param_version::sample(w, client, project_id, &id, &version_id, "hello world!").await?;
    tracing::info!("running get_param_version example");
    get_param_version::sample(w, client, project_id, &id, &version_id).await?;
    tracing::info!("running delete_param_version example");
    delete_param_version::sample(w, client, project_id, &id, &version_id).await?;
    tracing::info!("running delete_param example");
    delete_param::sample(w, client, project_id, &id).await?;

    let id = random_parameter_id();
    parameters.push(parameter_name(project_id, "global", &id));
    tracing::info!("running create_structured_param example");
    create_structured_param::sample(w, client, project_id, &id, ParameterFormat::Json).await?;
    let version_id = random_parameter_version_id();
    create_param_version::sample(
        w,
        client,
        project_id,
        &id,
        &version_id,
        r#"{"username": "test-user", "host": "localhost"}"#,
    )
    .await?;

    let id = random_parameter_id();
    parameters.push(parameter_name(project_id, location_id, &id));
    tracing::info!("running create_regional_param example");
    create_regional_param::sample(w, regional_client, project_id, location_id, &id).await?;

    Ok(())
}
