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

// [START parametermanager_list_params]
use anyhow::Context;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;
use std::io::Write;

/// Lists all the global parameters in a project.
pub async fn sample(
    w: &mut impl Write,
    client: &ParameterManager,
    project_id: &str,
) -> anyhow::Result<Vec<Parameter>> {
    let mut items = client
        .list_parameters()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .by_item();
    let mut parameters = Vec::new();
    while let Some(parameter) = items
        .next()
        .await
        .transpose()
        .context("failed to iterate parameters")?
    {
        writeln!(
            w,
            "Found parameter {} with format {}",
            parameter.name, parameter.format
        )?;
        parameters.push(parameter);
    }

    Ok(parameters)
}
// [END parametermanager_list_params]
