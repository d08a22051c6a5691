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

use crate::{
    unwrap::{split_tuple, try_unwrap, COMPACT, OPTION, VEC},
    SchemaCatalog, SchemaDescriptor,
};

/// Outcome of resolving one type name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// False if the type was found to be optional while resolving it
    pub required: bool,
    pub descriptor: SchemaDescriptor,
}

/// Which unwrapping rules apply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rules {
    /// RPC parameters: array items always become references
    Rpc,
    /// Call fields: items and tuple elements are taken from the catalog as they are
    Call,
}

/// Resolves type names to schema descriptors, memoizing every result in its catalog.
///
/// One resolver (and so one catalog) is meant to serve a single generation run. Resolution is
/// first-wins: the wrapper analysis runs only the first time a name is seen, later lookups return
/// the stored descriptor and report the type as required.
#[derive(Clone, Debug, Default)]
pub struct TypeResolver {
    catalog: SchemaCatalog,
}

impl TypeResolver {
    /// Resolver backed by a fresh catalog with the builtin primitives
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: SchemaCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> SchemaCatalog {
        self.catalog
    }

    /// Resolve the type of an RPC parameter.
    ///
    /// `Option<T>` and `Compact<T>` make the type not required, `Vec<T>` yields an array of
    /// references to `T`. Anything else resolves to a builtin primitive or, failing that, to a
    /// reference placeholder carrying the type name.
    pub fn resolve(&mut self, type_name: &str) -> Resolution {
        self.resolve_with(type_name, Rules::Rpc)
    }

    /// Resolve the type of a call field.
    ///
    /// Same as [Self::resolve] except that tuples become inline arrays, and array items and tuple
    /// elements are looked up in the catalog directly. Element types that are not in the catalog
    /// yet are not resolved further, they become reference placeholders.
    pub fn resolve_call_field(&mut self, type_name: &str) -> Resolution {
        self.resolve_with(type_name, Rules::Call)
    }

    fn resolve_with(&mut self, type_name: &str, rules: Rules) -> Resolution {
        if let Some(cached) = self.catalog.get(type_name) {
            return Resolution {
                required: true,
                descriptor: cached.clone(),
            };
        }

        let mut required = true;
        let mut working = type_name;
        let mut array = None;

        if let Some(inner) = try_unwrap(OPTION, working) {
            required = false;
            working = inner;
        }

        if let Some(inner) = try_unwrap(VEC, working) {
            array = Some(SchemaDescriptor::array_of(self.item(inner, rules)));
            working = inner;
        }

        if let Some(inner) = try_unwrap(COMPACT, working) {
            required = false;
            working = inner;
        }

        if array.is_none() && rules == Rules::Call {
            if let Some(elements) = split_tuple(working) {
                let elements = elements.into_iter().map(|elem| self.catalog_or_placeholder(elem));
                array = Some(SchemaDescriptor::tuple_of(elements.collect()));
            }
        }

        let descriptor = array.unwrap_or_else(|| self.leaf(working));
        self.catalog.register(type_name, descriptor.clone().into_catalog_entry(type_name));

        Resolution {
            required,
            descriptor,
        }
    }

    fn item(&self, type_name: &str, rules: Rules) -> SchemaDescriptor {
        match rules {
            Rules::Rpc => SchemaDescriptor::reference(type_name),
            Rules::Call => self.catalog_or_placeholder(type_name),
        }
    }

    fn catalog_or_placeholder(&self, type_name: &str) -> SchemaDescriptor {
        self.catalog
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| SchemaDescriptor::reference(type_name))
    }

    fn leaf(&self, type_name: &str) -> SchemaDescriptor {
        match self.catalog.get(type_name) {
            Some(desc) if desc.is_primitive() => desc.clone(),
            _ => {
                log::debug!("No schema known for type `{type_name}`, using a reference to it");
                SchemaDescriptor::reference(type_name)
            }
        }
    }
}
