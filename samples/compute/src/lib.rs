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

//! Samples for Compute Engine disk consistency groups.
//!
//! A consistency group is a resource policy. Regional disks join the group
//! by adding the policy to the disk, and leave it by removing the policy.
//! All the mutating calls are long-running operations, the samples wait for
//! them to complete.

pub mod consistency_group_add_disk;
pub mod consistency_group_create;
pub mod consistency_group_delete;
pub mod consistency_group_list_disks;
pub mod consistency_group_remove_disk;

use anyhow::Context;
use google_cloud_compute_v1::client::{RegionDisks, ResourcePolicies};
use google_cloud_compute_v1::model::Disk;
use google_cloud_lro::Poller;
use samples_test_utils::errors::ignore_not_found;
use std::io::Write;

/// Returns the relative URL of a consistency group.
///
/// This is the format expected by the `resource_policies` field in disks.
pub fn consistency_group_url(project_id: &str, region: &str, group_name: &str) -> String {
    format!("projects/{project_id}/regions/{region}/resourcePolicies/{group_name}")
}

pub async fn new_region_disks_client() -> anyhow::Result<RegionDisks> {
    let client = RegionDisks::builder()
        .with_tracing()
        .build()
        .await
        .context("failed to create client")?;
    Ok(client)
}

pub async fn new_resource_policies_client() -> anyhow::Result<ResourcePolicies> {
    let client = ResourcePolicies::builder()
        .with_tracing()
        .build()
        .await
        .context("failed to create client")?;
    Ok(client)
}

/// Creates a small regional disk, replicated in two zones of `region`.
pub async fn create_regional_disk(
    client: &RegionDisks,
    project_id: &str,
    region: &str,
    disk_name: &str,
) -> anyhow::Result<()> {
    let disk = Disk::new()
        .set_name(disk_name)
        .set_size_gb(10)
        .set_type(format!(
            "projects/{project_id}/regions/{region}/diskTypes/pd-balanced"
        ))
        .set_replica_zones([
            format!("projects/{project_id}/zones/{region}-a"),
            format!("projects/{project_id}/zones/{region}-b"),
        ])
        .set_labels([("source", "compute-samples")]);
    client
        .insert()
        .set_project(project_id)
        .set_region(region)
        .set_body(disk)
        .poller()
        .until_done()
        .await
        .context("unable to create disk")?
        .to_result()
        .context("unable to wait for the operation")?;
    Ok(())
}

/// Deletes a regional disk, a disk that does not exist is not an error.
pub async fn cleanup_disk(
    client: &RegionDisks,
    project_id: &str,
    region: &str,
    disk_name: &str,
) -> anyhow::Result<()> {
    tracing::info!("deleting disk {disk_name} in {region}");
    let operation = client
        .delete()
        .set_project(project_id)
        .set_region(region)
        .set_disk(disk_name)
        .poller()
        .until_done()
        .await;
    if let Some(operation) = ignore_not_found(operation)? {
        operation.to_result()?;
    }
    Ok(())
}

/// Deletes a consistency group, a group that does not exist is not an error.
pub async fn cleanup_consistency_group(
    client: &ResourcePolicies,
    project_id: &str,
    region: &str,
    group_name: &str,
) -> anyhow::Result<()> {
    tracing::info!("deleting consistency group {group_name} in {region}");
    let operation = client
        .delete()
        .set_project(project_id)
        .set_region(region)
        .set_resource_policy(group_name)
        .poller()
        .until_done()
        .await;
    if let Some(operation) = ignore_not_found(operation)? {
        operation.to_result()?;
    }
    Ok(())
}

/// Runs the consistency group samples.
///
/// The caller chooses the names of the group and the disk, and should clean
/// up both, even if this function fails.
pub async fn run_consistency_group_examples(
    w: &mut impl Write,
    disks: &RegionDisks,
    policies: &ResourcePolicies,
    project_id: &str,
    region: &str,
    group_name: &str,
    disk_name: &str,
) -> anyhow::Result<()> {
    tracing::info!("running consistency_group_create example");
    consistency_group_create::sample(w, policies, project_id, region, group_name).await?;
    tracing::info!("creating disk {disk_name}");
    create_regional_disk(disks, project_id, region, disk_name).await?;

    tracing::info!("running consistency_group_add_disk example");
    consistency_group_add_disk::sample(w, disks, project_id, region, group_name, disk_name)
        .await?;
    tracing::info!("running consistency_group_list_disks example");
    let members =
        consistency_group_list_disks::sample(w, disks, project_id, region, group_name).await?;
    anyhow::ensure!(
        members.iter().any(|m| m == disk_name),
        "disk {disk_name} missing from consistency group {group_name}, found {members:?}"
    );
    tracing::info!("running consistency_group_remove_disk example");
    consistency_group_remove_disk::sample(w, disks, project_id, region, group_name, disk_name)
        .await?;
    tracing::info!("running consistency_group_delete example");
    consistency_group_delete::sample(w, policies, project_id, region, group_name).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("p", "us-central1", "g", "projects/p/regions/us-central1/resourcePolicies/g")]
    #[test_case("my-project", "europe-west4", "my-group", "projects/my-project/regions/europe-west4/resourcePolicies/my-group")]
    fn url(project_id: &str, region: &str, group_name: &str, want: &str) {
        assert_eq!(consistency_group_url(project_id, region, group_name), want);
    }
}
