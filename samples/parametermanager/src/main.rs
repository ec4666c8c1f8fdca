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

//! Run the Parameter Manager samples from the command line.

mod args;

use args::{Args, Command};
use clap::Parser;
use parametermanager_samples::*;

const DESCRIPTION: &str = concat!(
    "Runs the Parameter Manager samples.",
    " All samples use the global endpoint, except for `create-regional-param`."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    samples_test_utils::tracing::init_cli_tracing();
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");

    let client = match &args.command {
        Command::CreateRegionalParam { location_id, .. } => {
            new_regional_client(location_id).await?
        }
        _ => new_client().await?,
    };
    let project = args.project_id.as_str();
    let mut stdout = std::io::stdout().lock();
    let w = &mut stdout;
    match args.command {
        Command::CreateParam { parameter_id } => {
            create_param::sample(w, &client, project, &parameter_id).await?;
        }
        Command::CreateStructuredParam {
            parameter_id,
            format,
        } => {
            create_structured_param::sample(w, &client, project, &parameter_id, format.into())
                .await?;
        }
        Command::CreateRegionalParam {
            location_id,
            parameter_id,
        } => {
            create_regional_param::sample(w, &client, project, &location_id, &parameter_id)
                .await?;
        }
        Command::GetParam { parameter_id } => {
            get_param::sample(w, &client, project, &parameter_id).await?;
        }
        Command::ListParams => {
            list_params::sample(w, &client, project).await?;
        }
        Command::CreateParamVersion {
            parameter_id,
            version_id,
            payload,
        } => {
            create_param_version::sample(w, &client, project, &parameter_id, &version_id, &payload)
                .await?;
        }
        Command::GetParamVersion {
            parameter_id,
            version_id,
        } => {
            get_param_version::sample(w, &client, project, &parameter_id, &version_id).await?;
        }
        Command::DeleteParamVersion {
            parameter_id,
            version_id,
        } => {
            delete_param_version::sample(w, &client, project, &parameter_id, &version_id).await?;
        }
        Command::DeleteParam { parameter_id } => {
            delete_param::sample(w, &client, project, &parameter_id).await?;
        }
    }

    Ok(())
}
