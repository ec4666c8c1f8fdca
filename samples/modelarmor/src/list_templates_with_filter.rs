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

// [START modelarmor_list_templates_with_filter]
use anyhow::Context;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_modelarmor_v1::client::ModelArmor;
use std::io::Write;

/// Lists the templates matching a filter, in this case, a single template id.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<Vec<String>> {
    let parent = format!("projects/{project_id}/locations/{location_id}");
    let mut items = client
        .list_templates()
        .set_filter(format!(r#"name="{parent}/templates/{template_id}""#))
        .set_parent(parent)
        .by_item();
    let mut names = Vec::new();
    while let Some(template) = items
        .next()
        .await
        .transpose()
        .context("failed to iterate templates")?
    {
        names.push(template.name);
    }
    writeln!(w, "Templates Found: {}", names.join(", "))?;

    Ok(names)
}
// [END modelarmor_list_templates_with_filter]
