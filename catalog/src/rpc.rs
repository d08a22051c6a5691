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

use std::collections::BTreeMap;

use indexmap::IndexMap;
use logging::log;
use openrpc_schema::{Resolution, SchemaDescriptor, TypeResolver};

use crate::ParamDescriptor;

/// Tag attached to every RPC method entry
pub const RPC_TAG: &str = "rpc";

/// RPC definitions keyed by section path, e.g. `interfaces/author`.
///
/// Sections are visited in ascending key order.
pub type RpcDefinitions = BTreeMap<String, RpcSection>;

/// Definitions of one section
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RpcSection {
    /// Methods, in the order they were defined
    #[serde(default)]
    pub rpc: IndexMap<String, RpcMethodDef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcMethodDef {
    #[serde(default)]
    pub params: Vec<RpcParamDef>,
    /// Declared result type
    #[serde(rename = "type", default)]
    pub result_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alias_section: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcParamDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MethodTag {
    pub name: String,
}

/// A described RPC method
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MethodEntry {
    #[serde(rename = "pallet")]
    pub section: String,
    pub name: String,
    pub params: Vec<ParamDescriptor>,
    pub tags: Vec<MethodTag>,
    pub result: Option<SchemaDescriptor>,
}

/// Source of method result schemas.
///
/// The declared result type of a method is not inferred by default (see [NoResultSchema]).
/// Implementations may resolve [RpcMethodDef::result_type] through the resolver, which makes the
/// result type part of the schema catalog of the run.
pub trait ResultSchemaResolver {
    fn result_schema(
        &self,
        method: &RpcMethodDef,
        resolver: &mut TypeResolver,
    ) -> Option<SchemaDescriptor>;
}

/// Leaves every method result empty
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResultSchema;

impl ResultSchemaResolver for NoResultSchema {
    fn result_schema(&self, _: &RpcMethodDef, _: &mut TypeResolver) -> Option<SchemaDescriptor> {
        None
    }
}

/// Section name of a definitions key: its last path segment
pub fn section_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Describe an RPC parameter.
///
/// The parameter is required unless it is declared optional or its type resolves as optional.
pub fn map_param(param: &RpcParamDef, resolver: &mut TypeResolver) -> ParamDescriptor {
    let Resolution {
        required,
        descriptor,
    } = resolver.resolve(&param.ty);

    ParamDescriptor {
        name: param.name.clone(),
        description: String::new(),
        source_type: param.ty.clone(),
        required: required && !param.is_optional,
        schema: descriptor,
    }
}

/// Build method entries for all sections, without result schemas.
pub fn build_method_catalog(
    definitions: &RpcDefinitions,
    resolver: &mut TypeResolver,
) -> Vec<MethodEntry> {
    build_method_catalog_with(definitions, resolver, &NoResultSchema)
}

/// Build method entries for all sections, taking result schemas from `results`.
///
/// Sections come in ascending key order, methods within a section in definition order.
pub fn build_method_catalog_with(
    definitions: &RpcDefinitions,
    resolver: &mut TypeResolver,
    results: &dyn ResultSchemaResolver,
) -> Vec<MethodEntry> {
    let mut methods = Vec::new();

    for (key, section_def) in definitions {
        let section = section_name(key);
        log::debug!("Describing {} RPC methods of section `{section}`", section_def.rpc.len());

        for (name, method) in &section_def.rpc {
            let params = method.params.iter().map(|param| map_param(param, resolver)).collect();
            let result = results.result_schema(method, resolver);

            methods.push(MethodEntry {
                section: section.to_owned(),
                name: name.clone(),
                params,
                tags: vec![MethodTag {
                    name: RPC_TAG.to_owned(),
                }],
                result,
            });
        }
    }

    methods
}
