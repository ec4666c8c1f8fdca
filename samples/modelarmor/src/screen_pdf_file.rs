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

// [START modelarmor_screen_pdf_file]
use anyhow::Context;
use base64::Engine;
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    ByteDataItem, DataItem, SanitizeUserPromptResponse, byte_data_item::ByteItemType,
};
use std::io::Write;

/// Screens the contents of a PDF file.
///
/// `pdf_content_base64` is the base64 encoding of the file. The client
/// library takes care of encoding the bytes for the wire, so the content is
/// decoded before it is sent.
pub async fn sample(
    w: &mut impl Write,
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
    pdf_content_base64: &str,
) -> anyhow::Result<SanitizeUserPromptResponse> {
    let pdf_content = base64::engine::general_purpose::STANDARD
        .decode(pdf_content_base64)
        .context("invalid base64 PDF content")?;

    let response = client
        .sanitize_user_prompt()
        .set_name(format!(
            "projects/{project_id}/locations/{location_id}/templates/{template_id}"
        ))
        .set_user_prompt_data(
            DataItem::new().set_byte_item(
                ByteDataItem::new()
                    .set_byte_data_type(ByteItemType::Pdf)
                    .set_byte_data(pdf_content),
            ),
        )
        .send()
        .await
        .context("failed to sanitize PDF content")?;
    writeln!(w, "PDF screening sanitization result: {response:?}")?;

    Ok(response)
}
// [END modelarmor_screen_pdf_file]
