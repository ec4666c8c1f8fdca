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

use clap::{Parser, Subcommand};
use std::collections::HashMap;

/// Command-line arguments for the Model Armor samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The project that owns the templates.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    /// The location of the templates, this also selects the regional endpoint.
    #[arg(long, env = "GOOGLE_CLOUD_RUST_TEST_LOCATION", default_value = "us-central1")]
    pub location_id: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The sample to run.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    CreateTemplate {
        template_id: String,
    },
    CreateTemplateWithLabels {
        template_id: String,
        /// Labels in `key=value` format, can be repeated.
        #[arg(long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },
    CreateTemplateWithMetadata {
        template_id: String,
    },
    CreateTemplateWithBasicSdp {
        template_id: String,
    },
    GetTemplate {
        template_id: String,
    },
    ListTemplates,
    ListTemplatesWithFilter {
        template_id: String,
    },
    UpdateTemplate {
        template_id: String,
    },
    UpdateTemplateLabels {
        template_id: String,
        #[arg(long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
    },
    UpdateTemplateMetadata {
        template_id: String,
    },
    DeleteTemplate {
        template_id: String,
    },
    SanitizeUserPrompt {
        template_id: String,
        user_prompt: String,
    },
    SanitizeModelResponse {
        template_id: String,
        model_response: String,
    },
    /// Screens a PDF file, the file is read from `path`.
    ScreenPdfFile {
        template_id: String,
        path: std::path::PathBuf,
    },
    GetProjectFloorSettings,
    GetFolderFloorSettings {
        folder_id: String,
    },
    GetOrganizationFloorSettings {
        organization_id: String,
    },
    UpdateProjectFloorSettings,
    UpdateFolderFloorSettings {
        folder_id: String,
    },
    UpdateOrganizationFloorSettings {
        organization_id: String,
    },
}

fn parse_label(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((k, _)) if k.is_empty() => Err(format!("empty label key in {value:?}")),
        Some((k, v)) => Ok((k.to_string(), v.to_string())),
        None => Err(format!("expected key=value, got {value:?}")),
    }
}

/// Collects repeated `--label` arguments into the map expected by the samples.
pub fn labels(values: &[(String, String)]) -> HashMap<String, String> {
    values.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn get_template() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=my-project",
            "--location-id=us-east4",
            "get-template",
            "my-template",
        ])?;
        assert_eq!(args.project_id, "my-project");
        assert_eq!(args.location_id, "us-east4");
        assert_eq!(
            args.command,
            Command::GetTemplate {
                template_id: "my-template".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn default_location() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program", "--project-id=p", "list-templates"])?;
        // The environment may override the default.
        let want = std::env::var("GOOGLE_CLOUD_RUST_TEST_LOCATION")
            .unwrap_or_else(|_| "us-central1".to_string());
        assert_eq!(args.location_id, want);
        assert_eq!(args.command, Command::ListTemplates);
        Ok(())
    }

    #[test]
    fn with_labels() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "create-template-with-labels",
            "t",
            "--label=key1=value1",
            "--label",
            "key2=",
        ])?;
        let Command::CreateTemplateWithLabels {
            template_id,
            labels: values,
        } = args.command
        else {
            panic!("unexpected command {:?}", args.command);
        };
        assert_eq!(template_id, "t");
        let got = labels(&values);
        let want = HashMap::from([
            ("key1".to_string(), "value1".to_string()),
            ("key2".to_string(), String::new()),
        ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("a=b", Some(("a", "b")))]
    #[test_case("a=b=c", Some(("a", "b=c")))]
    #[test_case("a=", Some(("a", "")))]
    #[test_case("=b", None)]
    #[test_case("ab", None)]
    fn label(input: &str, want: Option<(&str, &str)>) {
        let got = parse_label(input).ok();
        let want = want.map(|(k, v)| (k.to_string(), v.to_string()));
        assert_eq!(got, want, "{input}");
    }

    #[test]
    fn missing_subcommand() {
        let got = Args::try_parse_from(["program", "--project-id=p"]);
        assert!(got.is_err(), "{got:?}");
    }
}
