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

// [START modelarmor_create_template_with_metadata]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, RaiFilterSettings, RaiFilterType, Template,
    rai_filter_settings::RaiFilter, template::TemplateMetadata,
};
use std::io::Write;

pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<Template> {
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
        // For more details on template metadata, please refer to the following doc:
        // https://cloud.google.com/security-command-center/docs/reference/model-armor/rest/v1/projects.locations.templates#templatemetadata
        .set_template_metadata(
            TemplateMetadata::new()
                .set_ignore_partial_invocation_failures(true)
                .set_log_sanitize_operations(true),
        );

    let response = client
        .create_template()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_template_id(template_id)
        .set_template(template)
        .send()
        .await
        .context("failed to create template")?;
    writeln!(w, "Created Model Armor Template: {}", response.name)?;

    Ok(response)
}
// [END modelarmor_create_template_with_metadata]
