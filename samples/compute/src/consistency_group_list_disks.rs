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

// [START compute_consistency_group_list_disks]
use anyhow::Context;
use google_cloud_compute_v1::client::RegionDisks;
use google_cloud_compute_v1::model::Disk;
use google_cloud_gax::paginator::ItemPaginator;
use std::io::Write;

/// Lists the regional disks in a consistency group.
///
/// Returns the names of the disks.
pub async fn sample(
    w: &mut impl Write,
    client: &RegionDisks,
    project_id: &str,
    region: &str,
    group_name: &str,
) -> anyhow::Result<Vec<String>> {
    let group_url = format!("projects/{project_id}/regions/{region}/resourcePolicies/{group_name}");

    let mut items = client
        .list()
        .set_project(project_id)
        .set_region(region)
        .by_item();
    let mut names = Vec::new();
    while let Some(disk) = items
        .next()
        .await
        .transpose()
        .context("unable to list disks")?
    {
        if !in_group(&disk, &group_url) {
            continue;
        }
        let Some(name) = disk.name else {
            continue;
        };
        writeln!(w, "Disk: {name}")?;
        names.push(name);
    }

    Ok(names)
}

// The service returns absolute URLs, such as
// `https://www.googleapis.com/compute/v1/projects/...`.
fn in_group(disk: &Disk, group_url: &str) -> bool {
    disk.resource_policies
        .iter()
        .any(|p| p == group_url || p.ends_with(&format!("/{group_url}")))
}
// [END compute_consistency_group_list_disks]

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const GROUP: &str = "projects/p/regions/us-central1/resourcePolicies/g";

    #[test_case(&[], false)]
    #[test_case(&["projects/p/regions/us-central1/resourcePolicies/g"], true)]
    #[test_case(&["https://www.googleapis.com/compute/v1/projects/p/regions/us-central1/resourcePolicies/g"], true)]
    #[test_case(&["https://www.googleapis.com/compute/v1/projects/p/regions/us-central1/resourcePolicies/other-g"], false)]
    #[test_case(&["https://www.googleapis.com/compute/v1/projects/p/regions/us-central1/resourcePolicies/g-2"], false)]
    #[test_case(&["projects/p/regions/us-central1/resourcePolicies/a", "projects/p/regions/us-central1/resourcePolicies/g"], true)]
    fn membership(policies: &[&str], want: bool) {
        let disk = Disk::new().set_resource_policies(policies.iter().copied());
        assert_eq!(in_group(&disk, GROUP), want, "{policies:?}");
    }
}
