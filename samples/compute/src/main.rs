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

//! Run the consistency group samples from the command line.

mod args;

use args::{Args, Command};
use clap::Parser;
use compute_samples::*;

const DESCRIPTION: &str = concat!(
    "Runs the Compute Engine consistency group samples.",
    " The disks must be regional disks in the same region as the group."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    samples_test_utils::tracing::init_cli_tracing();
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");

    let (project, region) = (args.project_id.as_str(), args.region.as_str());
    let mut stdout = std::io::stdout().lock();
    let w = &mut stdout;
    match args.command {
        Command::Create { group_name } => {
            let client = new_resource_policies_client().await?;
            consistency_group_create::sample(w, &client, project, region, &group_name).await?;
        }
        Command::AddDisk {
            group_name,
            disk_name,
        } => {
            let client = new_region_disks_client().await?;
            consistency_group_add_disk::sample(w, &client, project, region, &group_name, &disk_name)
                .await?;
        }
        Command::ListDisks { group_name } => {
            let client = new_region_disks_client().await?;
            consistency_group_list_disks::sample(w, &client, project, region, &group_name).await?;
        }
        Command::RemoveDisk {
            group_name,
            disk_name,
        } => {
            let client = new_region_disks_client().await?;
            consistency_group_remove_disk::sample(
                w,
                &client,
                project,
                region,
                &group_name,
                &disk_name,
            )
            .await?;
        }
        Command::Delete { group_name } => {
            let client = new_resource_policies_client().await?;
            consistency_group_delete::sample(w, &client, project, region, &group_name).await?;
        }
    }

    Ok(())
}
