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

use clap::{Parser, Subcommand, ValueEnum};
use google_cloud_parametermanager_v1::model::ParameterFormat;

/// Command-line arguments for the Parameter Manager samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The project that owns the parameters.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The sample to run.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    CreateParam {
        parameter_id: String,
    },
    CreateStructuredParam {
        parameter_id: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Creates a parameter using the regional endpoint for `location_id`.
    CreateRegionalParam {
        location_id: String,
        parameter_id: String,
    },
    GetParam {
        parameter_id: String,
    },
    ListParams,
    CreateParamVersion {
        parameter_id: String,
        version_id: String,
        payload: String,
    },
    GetParamVersion {
        parameter_id: String,
        version_id: String,
    },
    DeleteParamVersion {
        parameter_id: String,
        version_id: String,
    },
    DeleteParam {
        parameter_id: String,
    },
}

/// The formats accepted by `create-structured-param`.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Format {
    Unformatted,
    Json,
    Yaml,
}

impl From<Format> for ParameterFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Unformatted => ParameterFormat::Unformatted,
            Format::Json => ParameterFormat::Json,
            Format::Yaml => ParameterFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn create_param() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=my-project",
            "create-param",
            "my-param",
        ])?;
        assert_eq!(args.project_id, "my-project");
        assert_eq!(
            args.command,
            Command::CreateParam {
                parameter_id: "my-param".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn structured_default() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program", "--project-id=p", "create-structured-param", "x"])?;
        assert_eq!(
            args.command,
            Command::CreateStructuredParam {
                parameter_id: "x".to_string(),
                format: Format::Json,
            }
        );
        Ok(())
    }

    #[test_case("unformatted", ParameterFormat::Unformatted)]
    #[test_case("json", ParameterFormat::Json)]
    #[test_case("yaml", ParameterFormat::Yaml)]
    fn format(input: &str, want: ParameterFormat) -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "create-structured-param",
            "x",
            "--format",
            input,
        ])?;
        let Command::CreateStructuredParam { format, .. } = args.command else {
            panic!("unexpected command {:?}", args.command);
        };
        assert_eq!(ParameterFormat::from(format), want);
        Ok(())
    }

    #[test]
    fn regional() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "create-regional-param",
            "us-east7",
            "my-param",
        ])?;
        assert_eq!(
            args.command,
            Command::CreateRegionalParam {
                location_id: "us-east7".to_string(),
                parameter_id: "my-param".to_string(),
            }
        );
        Ok(())
    }

    #[test]
    fn bad_format() {
        let got = Args::try_parse_from([
            "program",
            "--project-id=p",
            "create-structured-param",
            "x",
            "--format=xml",
        ]);
        assert!(got.is_err(), "{got:?}");
    }
}
