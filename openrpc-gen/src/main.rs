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

mod run_options;

use std::{io::Write, path::Path};

use anyhow::Context;
use clap::Parser;
use logging::log;
use openrpc_catalog::{generate_document, RpcDefinitions, RuntimeMetadata};
use run_options::GeneratorRunOptions;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let args = GeneratorRunOptions::parse();

    let rpc_definitions: RpcDefinitions = match &args.rpc_definitions {
        Some(path) => read_json(path)?,
        None => RpcDefinitions::new(),
    };
    let metadata: RuntimeMetadata = match &args.metadata {
        Some(path) => read_json(path)?,
        None => RuntimeMetadata::default(),
    };

    let document = generate_document(&rpc_definitions, &metadata.pallets, &metadata.types);
    let json = if args.compact {
        document.to_json()?
    } else {
        document.to_json_pretty()?
    };

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{json}")?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    log::info!(
        "Described {} RPC methods, {} extrinsics and {} schemas",
        document.methods.len(),
        document.extrinsics.len(),
        document.schemas.len(),
    );

    Ok(())
}
