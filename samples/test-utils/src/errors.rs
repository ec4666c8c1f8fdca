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

//! Classify errors returned by the client libraries.

use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::Code;

/// Returns true if the service reported that the resource does not exist.
pub fn is_not_found(error: &Error) -> bool {
    error.status().is_some_and(|s| s.code == Code::NotFound)
        || error.http_status_code() == Some(404)
}

/// Converts a NotFound error into `Ok(None)`.
///
/// Cleanup code uses this to delete resources that may already be gone.
pub fn ignore_not_found<T>(
    result: google_cloud_gax::Result<T>,
) -> google_cloud_gax::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(e) => Err(e),
    }
}
