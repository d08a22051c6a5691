// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "openrpc-gen",
    about = "Generate an OpenRPC description of RPC definitions and runtime calls"
)]
pub struct GeneratorRunOptions {
    /// JSON file with RPC definitions, keyed by section path
    #[clap(long, value_name = "PATH")]
    pub rpc_definitions: Option<PathBuf>,

    /// JSON file with the runtime pallets and their type lookup
    #[clap(long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Output file. The document is written to stdout if not given.
    #[clap(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty printing it
    #[clap(long)]
    pub compact: bool,
}
