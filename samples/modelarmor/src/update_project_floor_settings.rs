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

// [START modelarmor_update_project_floor_settings]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, FloorSetting, RaiFilterSettings, RaiFilterType,
    rai_filter_settings::RaiFilter,
};
use std::io::Write;

/// Enables floor setting enforcement for a project, with a single hate speech filter.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
) -> anyhow::Result<FloorSetting> {
    let floor_setting = FloorSetting::new()
        .set_name(format!("projects/{project_id}/locations/global/floorSetting"))
        .set_filter_config(FilterConfig::new().set_rai_settings(
            RaiFilterSettings::new().set_rai_filters([RaiFilter::new()
                .set_filter_type(RaiFilterType::HateSpeech)
                .set_confidence_level(DetectionConfidenceLevel::High)]),
        ))
        .set_enable_floor_setting_enforcement(true);

    let response = client
        .update_floor_setting()
        .set_floor_setting(floor_setting)
        .send()
        .await
        .context("failed to update floor setting")?;
    writeln!(w, "Updated Floor Setting: {response:?}")?;

    Ok(response)
}
// [END modelarmor_update_project_floor_settings]
