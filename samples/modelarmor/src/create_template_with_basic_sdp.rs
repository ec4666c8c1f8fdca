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

// [START modelarmor_create_template_with_basic_sdp]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, MaliciousUriFilterSettings,
    PiAndJailbreakFilterSettings, RaiFilterSettings, RaiFilterType, SdpBasicConfig,
    SdpFilterSettings, Template, malicious_uri_filter_settings, pi_and_jailbreak_filter_settings,
    rai_filter_settings::RaiFilter, sdp_basic_config,
};
use std::io::Write;

/// Creates a template that also enables Sensitive Data Protection with the basic configuration.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<Template> {
    let filter_config = FilterConfig::new()
        .set_rai_settings(RaiFilterSettings::new().set_rai_filters([
            RaiFilter::new()
                .set_filter_type(RaiFilterType::HateSpeech)
                .set_confidence_level(DetectionConfidenceLevel::High),
            RaiFilter::new()
                .set_filter_type(RaiFilterType::SexuallyExplicit)
                .set_confidence_level(DetectionConfidenceLevel::MediumAndAbove),
        ]))
        .set_pi_and_jailbreak_filter_settings(
            PiAndJailbreakFilterSettings::new()
                .set_filter_enforcement(
                    pi_and_jailbreak_filter_settings::PiAndJailbreakFilterEnforcement::Enabled,
                )
                .set_confidence_level(DetectionConfidenceLevel::MediumAndAbove),
        )
        .set_malicious_uri_filter_settings(MaliciousUriFilterSettings::new().set_filter_enforcement(
            malicious_uri_filter_settings::MaliciousUriFilterEnforcement::Enabled,
        ))
        .set_sdp_settings(
            SdpFilterSettings::new().set_basic_config(
                SdpBasicConfig::new()
                    .set_filter_enforcement(sdp_basic_config::SdpBasicConfigEnforcement::Enabled),
            ),
        );

    let response = client
        .create_template()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_template_id(template_id)
        .set_template(Template::new().set_filter_config(filter_config))
        .send()
        .await
        .context("failed to create template")?;
    writeln!(w, "Created template with basic SDP: {}", response.name)?;

    Ok(response)
}
// [END modelarmor_create_template_with_basic_sdp]
