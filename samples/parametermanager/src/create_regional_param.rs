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

// [START parametermanager_create_regional_param]
use anyhow::Context;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;
use std::io::Write;

/// Creates a parameter in `location_id`.
///
/// The client must be configured with the regional endpoint for
/// `location_id`, for example
/// `https://parametermanager.us-central1.rep.googleapis.com`.
pub async fn sample(
    w: &mut impl Write,
    client: &ParameterManager,
    project_id: &str,
    location_id: &str,
    parameter_id: &str,
) -> anyhow::Result<Parameter> {
    let parameter = client
        .create_parameter()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_parameter_id(parameter_id)
        .set_parameter(Parameter::new())
        .send()
        .await
        .context("failed to create regional parameter")?;
    writeln!(w, "Created regional parameter: {}", parameter.name)?;

    Ok(parameter)
}
// [END parametermanager_create_regional_param]
