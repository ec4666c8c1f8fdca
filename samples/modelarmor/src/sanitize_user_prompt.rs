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

// [START modelarmor_sanitize_user_prompt]
use anyhow::Context;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{DataItem, SanitizeUserPromptResponse};
use std::io::Write;

/// Screens a user prompt against the filters configured in a template.
///
/// # Parameters
/// - `w`: receives the sanitization result.
/// - `client`: a client for the regional endpoint matching `location_id`.
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `location_id`: the location of the template. For example: `us-central1`.
/// - `template_id`: the template with the filters to apply.
/// - `user_prompt`: the prompt entered by the user.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
    user_prompt: &str,
) -> anyhow::Result<SanitizeUserPromptResponse> {
    let response = client
        .sanitize_user_prompt()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/templates/{template_id}"
        ))
        .set_user_prompt_data(DataItem::new().set_text(user_prompt))
        .send()
        .await
        .context("failed to sanitize user prompt")?;
    writeln!(w, "Sanitization Result: {response:?}")?;

    Ok(response)
}
// [END modelarmor_sanitize_user_prompt]
