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

// [START parametermanager_create_param_version]
use anyhow::Context;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{ParameterVersion, ParameterVersionPayload};
use std::io::Write;

/// Creates a new version of a global parameter.
///
/// If the parameter has a JSON or YAML format the service rejects payloads
/// that do not parse in that format.
pub async fn sample(
    w: &mut impl Write,
    client: &ParameterManager,
    project_id: &str,
    parameter_id: &str,
    version_id: &str,
    payload: &str,
) -> anyhow::Result<ParameterVersion> {
    let version = ParameterVersion::new()
        .set_payload(ParameterVersionPayload::new().set_data(payload.as_bytes().to_vec()));
    let version = client
        .create_parameter_version()
        .set_parent(format!(
            "projects/{project_id}/locations/global/parameters/{parameter_id}"
        ))
        .set_parameter_version_id(version_id)
        .set_parameter_version(version)
        .send()
        .await
        .context("failed to create parameter version")?;
    writeln!(w, "Created parameter version: {}", version.name)?;

    Ok(version)
}
// [END parametermanager_create_param_version]
