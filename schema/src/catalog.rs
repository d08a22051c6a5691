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

use std::collections::{btree_map::Entry, BTreeMap};

use itertools::Itertools;
use serde::ser::{SerializeMap, Serializer};

use crate::{JsonType, SchemaDescriptor};

/// Builtin scalar types every catalog starts with
pub const BOOTSTRAP_PRIMITIVES: &[(&str, JsonType)] = &[
    ("bool", JsonType::Boolean),
    ("string", JsonType::String),
    ("Text", JsonType::String),
    ("Bytes", JsonType::String),
    ("u8", JsonType::Integer),
    ("u16", JsonType::Integer),
    ("u32", JsonType::Integer),
    ("u64", JsonType::Integer),
    ("u128", JsonType::Integer),
    ("i8", JsonType::Integer),
    ("i16", JsonType::Integer),
    ("i32", JsonType::Integer),
    ("i64", JsonType::Integer),
    ("i128", JsonType::Integer),
    ("f32", JsonType::Number),
    ("f64", JsonType::Number),
];

/// Schemas known in a single generation run, keyed by type name.
///
/// The catalog only ever grows: the first descriptor stored under a name stays there for the
/// rest of the run. Serialization lists the entries ordered by name, case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaCatalog {
    entries: BTreeMap<String, SchemaDescriptor>,
}

impl SchemaCatalog {
    /// New catalog seeded with the [BOOTSTRAP_PRIMITIVES]
    pub fn new() -> Self {
        let entries = BOOTSTRAP_PRIMITIVES
            .iter()
            .map(|(name, json_type)| {
                (
                    name.to_string(),
                    SchemaDescriptor::primitive(*name, *json_type),
                )
            })
            .collect();
        Self { entries }
    }

    /// New catalog with no entries at all, not even the builtin primitives
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&SchemaDescriptor> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Store a descriptor unless the name is taken already. Returns whether it was stored.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        descriptor: SchemaDescriptor,
    ) -> bool {
        match self.entries.entry(type_name.into()) {
            Entry::Vacant(entry) => {
                entry.insert(descriptor);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order: case-insensitive by name, ties broken by the exact name.
    pub fn sorted_entries(&self) -> Vec<(&str, &SchemaDescriptor)> {
        self.entries
            .iter()
            .map(|(name, desc)| (name.as_str(), desc))
            .sorted_by_cached_key(|(name, _)| (name.to_lowercase(), *name))
            .collect()
    }
}

impl Default for SchemaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl serde::Serialize for SchemaCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.sorted_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (name, desc) in entries {
            map.serialize_entry(name, &desc.definition(name))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_primitives() {
        let catalog = SchemaCatalog::new();
        assert_eq!(catalog.len(), BOOTSTRAP_PRIMITIVES.len());
        assert_eq!(
            catalog.get("u32"),
            Some(&SchemaDescriptor::primitive("u32", JsonType::Integer)),
        );
        assert!(SchemaCatalog::empty().is_empty());
    }

    #[test]
    fn first_registration_wins() {
        let mut catalog = SchemaCatalog::empty();
        assert!(catalog.register("Foo", SchemaDescriptor::reference("Foo")));
        assert!(!catalog.register("Foo", SchemaDescriptor::reference("Bar")));
        assert_eq!(catalog.get("Foo"), Some(&SchemaDescriptor::reference("Foo")));
    }

    #[rstest::rstest]
    #[case(&["b", "A", "a", "C"])]
    #[case(&["C", "a", "A", "b"])]
    #[case(&["a", "C", "b", "A"])]
    fn sorted_case_insensitively(#[case] names: &[&str]) {
        let mut catalog = SchemaCatalog::empty();
        for name in names {
            catalog.register(*name, SchemaDescriptor::reference(*name));
        }

        let order = catalog
            .sorted_entries()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        assert_eq!(order, ["A", "a", "b", "C"]);

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"A":{},"a":{},"b":{},"C":{}}"#);
    }
}
