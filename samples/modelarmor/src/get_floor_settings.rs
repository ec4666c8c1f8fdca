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

// [START modelarmor_get_floor_settings]
use crate::FloorSettingParent;
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::FloorSetting;
use std::io::Write;

/// Gets the floor setting of a project, folder, or organization.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    parent: &FloorSettingParent,
) -> anyhow::Result<FloorSetting> {
    let response = client
        .get_floor_setting()
        .set_name(parent.floor_setting_name())
        .send()
        .await
        .context("failed to get floor setting")?;
    writeln!(w, "Retrieved floor setting: {response:?}")?;

    Ok(response)
}
// [END modelarmor_get_floor_settings]
