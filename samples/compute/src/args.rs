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

use clap::{Parser, Subcommand};

/// Command-line arguments for the consistency group samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// The region for the consistency group and the disks.
    #[arg(long, env = "GOOGLE_CLOUD_RUST_TEST_REGION", default_value = "us-central1")]
    pub region: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    Create { group_name: String },
    AddDisk { group_name: String, disk_name: String },
    ListDisks { group_name: String },
    RemoveDisk { group_name: String, disk_name: String },
    Delete { group_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_disk() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=my-project",
            "--region=europe-west4",
            "add-disk",
            "my-group",
            "my-disk",
        ])?;
        assert_eq!(args.project_id, "my-project");
        assert_eq!(args.region, "europe-west4");
        assert_eq!(
            args.command,
            Command::AddDisk {
                group_name: "my-group".to_string(),
                disk_name: "my-disk".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn missing_disk() {
        let got = Args::try_parse_from(["program", "--project-id=p", "remove-disk", "my-group"]);
        assert!(got.is_err(), "{got:?}");
    }
}
