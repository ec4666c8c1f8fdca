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

// [START modelarmor_create_template_with_labels]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, RaiFilterSettings, RaiFilterType, Template,
    rai_filter_settings::RaiFilter,
};
use std::collections::HashMap;
use std::io::Write;

/// Creates a Model Armor template with labels.
///
/// # Parameters
/// - `w`: receives a confirmation message.
/// - `client`: a client for the regional endpoint matching `location_id`.
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `location_id`: the location of the template. For example: `us-central1`.
/// - `template_id`: the id for the new template.
/// - `labels`: the labels attached to the template.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
    labels: HashMap<String, String>,
) -> anyhow::Result<Template> {
    // Build the Model Armor template with your preferred filters.
    // For more details on filters, please refer to the following doc:
    // https://cloud.google.com/security-command-center/docs/key-concepts-model-armor#ma-filters
    let template = Template::new()
        .set_filter_config(
            FilterConfig::new().set_rai_settings(RaiFilterSettings::new().set_rai_filters([
                RaiFilter::new()
                    .set_filter_type(RaiFilterType::HateSpeech)
                    .set_confidence_level(DetectionConfidenceLevel::High),
                RaiFilter::new()
                    .set_filter_type(RaiFilterType::SexuallyExplicit)
                    .set_confidence_level(DetectionConfidenceLevel::MediumAndAbove),
            ])),
        )
        .set_labels(labels);

    let response = client
        .create_template()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_template_id(template_id)
        .set_template(template)
        .send()
        .await
        .context("failed to create template")?;
    writeln!(w, "Created template: {}", response.name)?;

    Ok(response)
}
// [END modelarmor_create_template_with_labels]
