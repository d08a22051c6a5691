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

//! Catalogs of RPC methods and runtime calls, and the document combining them with the schema
//! catalog.
//!
//! All catalogs of one run share a single [TypeResolver], and are built in a fixed order (RPC
//! sections, then methods, then parameters; pallets, then calls, then fields) so that the first
//! resolution of every type, and with it the whole output, is reproducible.

mod document;
mod error;
mod extrinsics;
mod metadata;
mod naming;
mod param;
mod rpc;
mod sanitize;

pub use document::{emit_catalog_document, generate_document, CatalogDocument};
pub use error::{Error, Result};
pub use extrinsics::{build_extrinsic_catalog, call_field_type_name, CallMethod, ExtrinsicEntry};
pub use metadata::{
    CallField, CallVariant, LookupType, PalletMetadata, PortableLookup, RuntimeMetadata, TypeDef,
    TypeId, TypeLookup,
};
pub use naming::map_name;
pub use param::ParamDescriptor;
pub use rpc::{
    build_method_catalog, build_method_catalog_with, map_param, section_name, MethodEntry,
    MethodTag, NoResultSchema, ResultSchemaResolver, RpcDefinitions, RpcMethodDef, RpcParamDef,
    RpcSection, RPC_TAG,
};
pub use sanitize::sanitize_description;

pub use openrpc_schema::{SchemaCatalog, SchemaDescriptor, TypeResolver};
