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

// [START parametermanager_create_structured_param]
use anyhow::Context;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{Parameter, ParameterFormat};
use std::io::Write;

/// Creates a parameter whose versions must be valid JSON or YAML.
pub async fn sample(
    w: &mut impl Write,
    client: &ParameterManager,
    project_id: &str,
    parameter_id: &str,
    format: ParameterFormat,
) -> anyhow::Result<Parameter> {
    let parameter = client
        .create_parameter()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_parameter_id(parameter_id)
        .set_parameter(Parameter::new().set_format(format))
        .send()
        .await
        .context("failed to create parameter")?;
    writeln!(
        w,
        "Created parameter {} with format {}",
        parameter.name, parameter.format
    )?;

    Ok(parameter)
}
// [END parametermanager_create_structured_param]
