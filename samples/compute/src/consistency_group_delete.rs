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

// [START compute_consistency_group_delete]
use anyhow::Context;
use google_cloud_compute_v1::client::ResourcePolicies;
use google_cloud_lro::Poller;
use std::io::Write;

/// Deletes a consistency group, the group must not have any disks.
pub async fn sample(
    w: &mut impl Write,
    client: &ResourcePolicies,
    project_id: &str,
    region: &str,
    group_name: &str,
) -> anyhow::Result<()> {
    client
        .delete()
        .set_project(project_id)
        .set_region(region)
        .set_resource_policy(group_name)
        .poller()
        .until_done()
        .await
        .context("unable to delete consistency group")?
        .to_result()
        .context("unable to wait for the operation")?;
    writeln!(w, "Consistency group deleted")?;

    Ok(())
}
// [END compute_consistency_group_delete]
