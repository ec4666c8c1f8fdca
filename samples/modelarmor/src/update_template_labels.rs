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

// [START modelarmor_update_template_with_labels]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::Template;
use google_cloud_wkt::FieldMask;
use std::collections::HashMap;
use std::io::Write;

/// Updates the labels of a template, leaving the rest of its configuration unchanged.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
    labels: HashMap<String, String>,
) -> anyhow::Result<Template> {
    let template = Template::new()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/templates/{template_id}"
        ))
        .set_labels(labels);

    let response = client
        .update_template()
        .set_template(template)
        .set_update_mask(FieldMask::default().set_paths(["labels"]))
        .send()
        .await
        .context("failed to update template")?;
    writeln!(w, "Updated Model Armor Template Labels: {}", response.name)?;

    Ok(response)
}
// [END modelarmor_update_template_with_labels]
