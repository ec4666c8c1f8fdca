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

//! Helper functions and types to generate random resource names.

use rand::{
    Rng,
    distr::{Distribution, Uniform},
};

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids.
/// It starts with a letter, which Compute Engine requires.
pub const PREFIX: &str = "rust-sdk-testing-";

const TEMPLATE_ID_LENGTH: usize = 63;

const PARAMETER_ID_LENGTH: usize = 63;

const PARAMETER_VERSION_ID_LENGTH: usize = 63;

const COMPUTE_NAME_LENGTH: usize = 63;

/// Generate a random Model Armor template id.
pub fn random_template_id() -> String {
    random_id(TEMPLATE_ID_LENGTH)
}

/// Generate a random Parameter Manager parameter id.
pub fn random_parameter_id() -> String {
    random_id(PARAMETER_ID_LENGTH)
}

/// Generate a random Parameter Manager parameter version id.
pub fn random_parameter_version_id() -> String {
    random_id(PARAMETER_VERSION_ID_LENGTH)
}

/// Generate a random name for a Compute Engine disk.
pub fn random_disk_name() -> String {
    random_id(COMPUTE_NAME_LENGTH)
}

/// Generate a random name for a Compute Engine consistency group.
pub fn random_consistency_group_name() -> String {
    random_id(COMPUTE_NAME_LENGTH)
}

fn random_id(length: usize) -> String {
    let id = LowercaseAlphanumeric.random_string(length - PREFIX.len());
    format!("{PREFIX}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use samples_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}
