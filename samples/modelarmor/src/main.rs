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

//! Run the Model Armor samples from the command line.
//!
//! Each subcommand runs one sample and prints its output to stdout. Set
//! `RUST_LOG` to see the logs from the client library.

mod args;

use args::{Args, Command, labels};
use clap::Parser;
use modelarmor_samples::*;

const DESCRIPTION: &str = concat!(
    "Runs the Model Armor samples.",
    " Most samples manage templates in a single project and location,",
    " the floor settings samples operate on a project, folder, or organization."
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    samples_test_utils::tracing::init_cli_tracing();
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");

    let client = new_client(&args.location_id).await?;
    let (project, location) = (args.project_id.as_str(), args.location_id.as_str());
    let mut stdout = std::io::stdout().lock();
    let w = &mut stdout;
    match args.command {
        Command::CreateTemplate { template_id } => {
            create_template::sample(w, &client, project, location, &template_id).await?;
        }
        Command::CreateTemplateWithLabels {
            template_id,
            labels: values,
        } => {
            create_template_with_labels::sample(
                w,
                &client,
                project,
                location,
                &template_id,
                labels(&values),
            )
            .await?;
        }
        Command::CreateTemplateWithMetadata { template_id } => {
            create_template_with_metadata::sample(w, &client, project, location, &template_id)
                .await?;
        }
        Command::CreateTemplateWithBasicSdp { template_id } => {
            create_template_with_basic_sdp::sample(w, &client, project, location, &template_id)
                .await?;
        }
        Command::GetTemplate { template_id } => {
            get_template::sample(w, &client, project, location, &template_id).await?;
        }
        Command::ListTemplates => {
            list_templates::sample(w, &client, project, location).await?;
        }
        Command::ListTemplatesWithFilter { template_id } => {
            list_templates_with_filter::sample(w, &client, project, location, &template_id)
                .await?;
        }
        Command::UpdateTemplate { template_id } => {
            update_template::sample(w, &client, project, location, &template_id).await?;
        }
        Command::UpdateTemplateLabels {
            template_id,
            labels: values,
        } => {
            update_template_labels::sample(
                w,
                &client,
                project,
                location,
                &template_id,
                labels(&values),
            )
            .await?;
        }
        Command::UpdateTemplateMetadata { template_id } => {
            update_template_metadata::sample(w, &client, project, location, &template_id).await?;
        }
        Command::DeleteTemplate { template_id } => {
            delete_template::sample(w, &client, project, location, &template_id).await?;
        }
        Command::SanitizeUserPrompt {
            template_id,
            user_prompt,
        } => {
            sanitize_user_prompt::sample(w, &client, project, location, &template_id, &user_prompt)
                .await?;
        }
        Command::SanitizeModelResponse {
            template_id,
            model_response,
        } => {
            sanitize_model_response::sample(
                w,
                &client,
                project,
                location,
                &template_id,
                &model_response,
            )
            .await?;
        }
        Command::ScreenPdfFile { template_id, path } => {
            use base64::Engine;
            let contents = tokio::fs::read(&path).await?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(contents);
            screen_pdf_file::sample(w, &client, project, location, &template_id, &encoded).await?;
        }
        Command::GetProjectFloorSettings => {
            let parent = FloorSettingParent::Project(args.project_id.clone());
            get_floor_settings::sample(w, &client, &parent).await?;
        }
        Command::GetFolderFloorSettings { folder_id } => {
            get_floor_settings::sample(w, &client, &FloorSettingParent::Folder(folder_id)).await?;
        }
        Command::GetOrganizationFloorSettings { organization_id } => {
            let parent = FloorSettingParent::Organization(organization_id);
            get_floor_settings::sample(w, &client, &parent).await?;
        }
        Command::UpdateProjectFloorSettings => {
            update_project_floor_settings::sample(w, &client, project).await?;
        }
        Command::UpdateFolderFloorSettings { folder_id } => {
            update_folder_floor_settings::sample(w, &client, &folder_id).await?;
        }
        Command::UpdateOrganizationFloorSettings { organization_id } => {
            update_organization_floor_settings::sample(w, &client, &organization_id).await?;
        }
    }

    Ok(())
}
