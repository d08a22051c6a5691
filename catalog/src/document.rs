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

use logging::log;
use openrpc_schema::{SchemaCatalog, TypeResolver};

use crate::{
    build_extrinsic_catalog, build_method_catalog, Error, ExtrinsicEntry, MethodEntry,
    PalletMetadata, Result, RpcDefinitions, TypeLookup,
};

/// Everything one generation run produced, ready for templating or serialization
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CatalogDocument {
    pub methods: Vec<MethodEntry>,
    pub extrinsics: Vec<ExtrinsicEntry>,
    /// Serialized ordered by name, case-insensitively
    pub schemas: SchemaCatalog,
}

pub fn emit_catalog_document(
    methods: Vec<MethodEntry>,
    schemas: SchemaCatalog,
    extrinsics: Vec<ExtrinsicEntry>,
) -> CatalogDocument {
    CatalogDocument {
        methods,
        extrinsics,
        schemas,
    }
}

/// Run the whole pipeline with a fresh schema catalog: RPC methods first, then runtime calls.
pub fn generate_document(
    rpc_definitions: &RpcDefinitions,
    pallets: &[PalletMetadata],
    lookup: &impl TypeLookup,
) -> CatalogDocument {
    let mut resolver = TypeResolver::new();

    let methods = build_method_catalog(rpc_definitions, &mut resolver);
    let extrinsics = build_extrinsic_catalog(lookup, pallets, &mut resolver);

    log::debug!(
        "Generated {} methods, {} extrinsics and {} schemas",
        methods.len(),
        extrinsics.len(),
        resolver.catalog().len(),
    );

    emit_catalog_document(methods, resolver.into_catalog(), extrinsics)
}

/// Parse rendered output and print it again, compact or pretty.
fn reformat(rendered: &str, pretty: bool) -> Result<String> {
    let parsed: serde_json::Value =
        serde_json::from_str(rendered).map_err(Error::MalformedDocument)?;

    let output = if pretty {
        serde_json::to_string_pretty(&parsed)
    } else {
        serde_json::to_string(&parsed)
    };
    output.map_err(Error::Serialization)
}

impl CatalogDocument {
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::Serialization)
    }

    /// Compact JSON text of the document
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).map_err(Error::Serialization)?;
        reformat(&json, false)
    }

    /// Pretty printed JSON text of the document
    pub fn to_json_pretty(&self) -> Result<String> {
        let json = serde_json::to_string(self).map_err(Error::Serialization)?;
        reformat(&json, true)
    }

    /// Render the document through a text template producing JSON.
    ///
    /// The output of the template must parse as JSON, it is returned pretty printed. A parse
    /// failure is reported as [Error::MalformedDocument] carrying the parser error.
    pub fn render_with(
        &self,
        template: impl FnOnce(&CatalogDocument) -> String,
    ) -> Result<String> {
        let rendered = template(self);
        reformat(&rendered, true).inspect_err(|err| {
            log::error!("Rendered document is malformed: {err}");
        })
    }
}
