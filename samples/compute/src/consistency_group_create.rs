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

// [START compute_consistency_group_create]
use anyhow::Context;
use google_cloud_compute_v1::client::ResourcePolicies;
use google_cloud_compute_v1::model::{ResourcePolicy, ResourcePolicyDiskConsistencyGroupPolicy};
use google_cloud_lro::Poller;
use std::io::Write;

/// Creates a consistency group in `region`.
pub async fn sample(
    w: &mut impl Write,
    client: &ResourcePolicies,
    project_id: &str,
    region: &str,
    group_name: &str,
) -> anyhow::Result<()> {
    let policy = ResourcePolicy::new()
        .set_name(group_name)
        .set_description("A consistency group created by the Rust client library.")
        .set_disk_consistency_group_policy(ResourcePolicyDiskConsistencyGroupPolicy::new());

    client
        .insert()
        .set_project(project_id)
        .set_region(region)
        .set_body(policy)
        .poller()
        .until_done()
        .await
        .context("unable to create consistency group")?
        .to_result()
        .context("unable to wait for the operation")?;
    writeln!(w, "Consistency group created")?;

    Ok(())
}
// [END compute_consistency_group_create]
