// Copyright (c) 2022 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use log;

/// Filter used when the environment variable is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable the log filter is read from.
pub const LOG_FILTER_ENV_VAR: &str = "RUST_LOG";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Install the global logger. Output goes to stderr so it never mixes with a generated document
/// printed on stdout. Calling this more than once is harmless.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let env = env_logger::Env::default()
            .filter_or(LOG_FILTER_ENV_VAR, DEFAULT_LOG_FILTER);

        // Somebody else (a test harness, typically) may have installed a logger already.
        let _ = env_logger::Builder::from_env(env)
            .target(env_logger::Target::Stderr)
            .try_init();
    });
}
