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

// [START compute_consistency_group_remove_disk]
use anyhow::Context;
use google_cloud_compute_v1::client::RegionDisks;
use google_cloud_compute_v1::model::RegionDisksRemoveResourcePoliciesRequest;
use google_cloud_lro::Poller;
use std::io::Write;

pub async fn sample(
    w: &mut impl Write,
    client: &RegionDisks,
    project_id: &str,
    region: &str,
    group_name: &str,
    disk_name: &str,
) -> anyhow::Result<()> {
    let group_url = format!("projects/{project_id}/regions/{region}/resourcePolicies/{group_name}");

    client
        .remove_resource_policies()
        .set_project(project_id)
        .set_region(region)
        .set_disk(disk_name)
        .set_body(
            RegionDisksRemoveResourcePoliciesRequest::new().set_resource_policies([group_url]),
        )
        .poller()
        .until_done()
        .await
        .context("unable to remove disk")?
        .to_result()
        .context("unable to wait for the operation")?;
    writeln!(w, "Disk removed")?;

    Ok(())
}
// [END compute_consistency_group_remove_disk]
