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

//! Type descriptor resolution for OpenRPC schema generation.
//!
//! Metadata type strings such as `Option<Vec<AccountId32>>` are resolved to [SchemaDescriptor]s
//! and memoized in a [SchemaCatalog], which later becomes the `schemas` section of the generated
//! document.

mod catalog;
mod descriptor;
mod resolver;
pub mod unwrap;

pub use catalog::{SchemaCatalog, BOOTSTRAP_PRIMITIVES};
pub use descriptor::{
    schema_ref, ArrayItems, Definition, JsonType, SchemaDescriptor, SCHEMA_REF_PREFIX,
};
pub use resolver::{Resolution, TypeResolver};
