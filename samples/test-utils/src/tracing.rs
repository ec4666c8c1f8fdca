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

use ::tracing::Level;
use tracing_subscriber::EnvFilter;

const CLI_DEFAULT_FILTER: &str = "warn";

/// The most verbose level logged by the samples drivers in tests.
///
/// Enable the `log-integration-tests` feature to include the `INFO` events,
/// these show each sample as it starts.
pub fn driver_level() -> Level {
    if cfg!(feature = "log-integration-tests") {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Enables tracing for the samples drivers.
///
/// The subscriber is installed for the current thread only, and removed when
/// the returned guard is dropped. Events go to the test writer, so `cargo
/// test` only shows them for failed tests.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_max_level(driver_level())
        .finish();

    ::tracing::subscriber::set_default(subscriber)
}

/// Returns the filter for the command-line programs.
///
/// Honors `RUST_LOG`, and defaults to `warn` so the sample output is not
/// drowned by the client library logs.
pub fn cli_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CLI_DEFAULT_FILTER))
}

/// Initializes logging for the command-line programs.
pub fn init_cli_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(cli_filter())
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        // The existing global subscriber stays in place.
        ::tracing::debug!("logging already initialized: {e}");
    }
}
