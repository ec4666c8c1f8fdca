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

use anyhow::Result;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const LOCATION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_LOCATION";
const FOLDER_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_FOLDER";
const ORGANIZATION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_ORGANIZATION";
const DEFAULT_REGION: &str = "us-central1";
const DEFAULT_LOCATION: &str = "us-central1";

/// Returns the project id used by the samples.
pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).map_err(anyhow::Error::from)
}

/// Returns the Compute Engine region used by the samples.
pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

/// Returns the location for regional services, such as Model Armor.
pub fn location_id() -> String {
    std::env::var(LOCATION_VAR)
        .ok()
        .unwrap_or(DEFAULT_LOCATION.to_string())
}

/// Returns the folder used by the folder-level samples, if configured.
///
/// Changing folder settings requires permissions most test accounts do not
/// have, the samples that need a folder are skipped when this is `None`.
pub fn folder_id() -> Option<String> {
    std::env::var(FOLDER_VAR).ok().filter(|v| !v.is_empty())
}

/// Returns the organization used by the organization-level samples, if configured.
pub fn organization_id() -> Option<String> {
    std::env::var(ORGANIZATION_VAR)
        .ok()
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[serial]
    #[test]
    fn project() {
        let _env = ScopedEnv::remove(PROJECT_VAR);
        let got = project_id();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(PROJECT_VAR, "abc");
        let got = project_id();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn region() {
        let _env = ScopedEnv::remove(REGION_VAR);
        assert_eq!(region_id(), DEFAULT_REGION);
        let _env = ScopedEnv::set(REGION_VAR, "europe-west4");
        assert_eq!(region_id(), "europe-west4");
    }

    #[serial]
    #[test]
    fn location() {
        let _env = ScopedEnv::remove(LOCATION_VAR);
        assert_eq!(location_id(), DEFAULT_LOCATION);
        let _env = ScopedEnv::set(LOCATION_VAR, "us-east4");
        assert_eq!(location_id(), "us-east4");
    }

    #[serial]
    #[test]
    fn folder() {
        let _env = ScopedEnv::remove(FOLDER_VAR);
        assert_eq!(folder_id(), None);
        let _env = ScopedEnv::set(FOLDER_VAR, "");
        assert_eq!(folder_id(), None);
        let _env = ScopedEnv::set(FOLDER_VAR, "123456");
        assert_eq!(folder_id().as_deref(), Some("123456"));
    }

    #[serial]
    #[test]
    fn organization() {
        let _env = ScopedEnv::remove(ORGANIZATION_VAR);
        assert_eq!(organization_id(), None);
        let _env = ScopedEnv::set(ORGANIZATION_VAR, "654321");
        assert_eq!(organization_id().as_deref(), Some("654321"));
    }
}
