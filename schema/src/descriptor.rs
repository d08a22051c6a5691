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

use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};

/// Location of every named schema inside the generated document.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Primitive names that are written out inline as `{ "type": .. }`. Every other primitive is
/// referenced through the schema catalog.
const INLINE_PRIMITIVES: [&str; 2] = ["string", "bool"];

pub fn schema_ref(name: &str) -> String {
    format!("{SCHEMA_REF_PREFIX}{name}")
}

/// JSON-Schema primitive types
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
}

/// Schema describing a single metadata type
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDescriptor {
    /// Builtin scalar with a direct JSON-Schema counterpart
    Primitive { name: String, json_type: JsonType },

    /// Schema defined elsewhere in the catalog, or outside of it
    Reference { name: String },

    /// Array of elements.
    ///
    /// Once stored in the catalog, the array carries the name it is stored under and is
    /// referenced by that name instead of being written out inline.
    Array {
        name: Option<String>,
        items: ArrayItems,
    },

    /// Composite type with named members
    Object {
        properties: BTreeMap<String, SchemaDescriptor>,
        required: Vec<String>,
    },
}

/// Element description of an array schema
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayItems {
    /// All elements share one schema (`Vec<T>`)
    Uniform(Box<SchemaDescriptor>),

    /// Positional element schemas (tuples)
    Tuple(Vec<SchemaDescriptor>),
}

impl SchemaDescriptor {
    pub fn primitive(name: impl Into<String>, json_type: JsonType) -> Self {
        Self::Primitive {
            name: name.into(),
            json_type,
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference { name: name.into() }
    }

    pub fn array_of(item: SchemaDescriptor) -> Self {
        Self::Array {
            name: None,
            items: ArrayItems::Uniform(Box::new(item)),
        }
    }

    pub fn tuple_of(elements: Vec<SchemaDescriptor>) -> Self {
        Self::Array {
            name: None,
            items: ArrayItems::Tuple(elements),
        }
    }

    /// Name the descriptor is known by, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Primitive { name, .. } | Self::Reference { name } => Some(name),
            Self::Array { name, .. } => name.as_deref(),
            Self::Object { .. } => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive { .. })
    }

    /// The form stored in the catalog under `key`. Arrays take the key as their name.
    pub(crate) fn into_catalog_entry(self, key: &str) -> Self {
        match self {
            Self::Array { name: None, items } => Self::Array {
                name: Some(key.to_owned()),
                items,
            },
            other => other,
        }
    }

    /// Catalog definition view of this descriptor, as it appears under `key` in the `schemas`
    /// section of the document.
    pub fn definition<'a>(&'a self, key: &'a str) -> Definition<'a> {
        Definition {
            key,
            descriptor: self,
        }
    }
}

fn serialize_type<S: Serializer>(serializer: S, json_type: JsonType) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("type", &json_type)?;
    map.end()
}

fn serialize_ref<S: Serializer>(serializer: S, name: &str) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("$ref", &schema_ref(name))?;
    map.end()
}

fn serialize_array<S: Serializer>(serializer: S, items: &ArrayItems) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", "array")?;
    map.serialize_entry("items", items)?;
    map.end()
}

fn serialize_object<S: Serializer>(
    serializer: S,
    properties: &BTreeMap<String, SchemaDescriptor>,
    required: &[String],
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(3))?;
    map.serialize_entry("type", "object")?;
    map.serialize_entry("properties", properties)?;
    map.serialize_entry("required", required)?;
    map.end()
}

/// Serializes the way the descriptor is used from a parameter or an array element.
///
/// Only the `string` and `bool` primitives are inlined, other primitives and named arrays are
/// written as `$ref`s into the catalog.
impl Serialize for SchemaDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Primitive { name, json_type } if INLINE_PRIMITIVES.contains(&name.as_str()) => {
                serialize_type(serializer, *json_type)
            }
            Self::Primitive { name, .. }
            | Self::Reference { name }
            | Self::Array {
                name: Some(name), ..
            } => serialize_ref(serializer, name),
            Self::Array { name: None, items } => serialize_array(serializer, items),
            Self::Object {
                properties,
                required,
            } => serialize_object(serializer, properties, required),
        }
    }
}

impl Serialize for ArrayItems {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uniform(item) => item.serialize(serializer),
            Self::Tuple(elements) => elements.serialize(serializer),
        }
    }
}

/// A catalog entry as written in the `schemas` section
#[derive(Clone, Copy, Debug)]
pub struct Definition<'a> {
    key: &'a str,
    descriptor: &'a SchemaDescriptor,
}

impl Serialize for Definition<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.descriptor {
            SchemaDescriptor::Primitive { json_type, .. } => serialize_type(serializer, *json_type),
            // An opaque type nobody has described, anything goes.
            SchemaDescriptor::Reference { name } if name == self.key => {
                serializer.serialize_map(Some(0))?.end()
            }
            SchemaDescriptor::Reference { name } => serialize_ref(serializer, name),
            SchemaDescriptor::Array { items, .. } => serialize_array(serializer, items),
            SchemaDescriptor::Object {
                properties,
                required,
            } => serialize_object(serializer, properties, required),
        }
    }
}
