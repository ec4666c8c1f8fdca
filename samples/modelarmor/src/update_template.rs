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

// [START modelarmor_update_template]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, MaliciousUriFilterSettings,
    PiAndJailbreakFilterSettings, Template, malicious_uri_filter_settings,
    pi_and_jailbreak_filter_settings,
};
use std::io::Write;

/// Replaces the filter configuration of an existing template.
///
/// Without an update mask the service replaces all the mutable fields.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<Template> {
    let template = Template::new()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/templates/{template_id}"
        ))
        .set_filter_config(
            FilterConfig::new()
                .set_pi_and_jailbreak_filter_settings(
                    PiAndJailbreakFilterSettings::new()
                        .set_filter_enforcement(
                            pi_and_jailbreak_filter_settings::PiAndJailbreakFilterEnforcement::Enabled,
                        )
                        .set_confidence_level(DetectionConfidenceLevel::LowAndAbove),
                )
                .set_malicious_uri_filter_settings(
                    MaliciousUriFilterSettings::new().set_filter_enforcement(
                        malicious_uri_filter_settings::MaliciousUriFilterEnforcement::Enabled,
                    ),
                ),
        );

    let response = client
        .update_template()
        .set_template(template)
        .send()
        .await
        .context("failed to update template")?;
    writeln!(w, "Updated Model Armor Template: {}", response.name)?;

    Ok(response)
}
// [END modelarmor_update_template]
