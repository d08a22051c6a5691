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

//! Decoded runtime metadata: pallets, their call enums and the type lookup resolving them

use std::collections::BTreeMap;

/// Index of a type in the runtime type lookup
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the type lookup names a type
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    /// Rendered type, e.g. `Vec<u8>`
    #[serde(rename = "type")]
    pub type_string: String,
    /// Whether `type_string` was derived from the registry and can be used as is
    #[serde(default)]
    pub is_from_si: bool,
    /// Alias assigned by the lookup, e.g. `PalletBalancesCall`
    #[serde(default)]
    pub lookup_name: Option<String>,
}

/// One call of a pallet's call enum
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CallVariant {
    pub name: String,
    #[serde(default)]
    pub docs: Vec<String>,
    #[serde(default)]
    pub fields: Vec<CallField>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeId,
    /// Type name as written in the runtime source
    #[serde(default)]
    pub type_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct PalletMetadata {
    pub name: String,
    /// Call enum of the pallet, if it has any calls
    #[serde(default)]
    pub calls: Option<TypeId>,
}

/// Access to the runtime type lookup
pub trait TypeLookup {
    fn type_def(&self, id: TypeId) -> Option<TypeDef>;

    /// Variants of an enum type. `None` if the type is unknown or not an enum.
    fn variants(&self, id: TypeId) -> Option<Vec<CallVariant>>;
}

/// Entry of a [PortableLookup]
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LookupType {
    #[serde(flatten)]
    pub def: TypeDef,
    #[serde(default)]
    pub variants: Option<Vec<CallVariant>>,
}

/// In-memory type lookup, as found in exported metadata
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct PortableLookup {
    types: BTreeMap<TypeId, LookupType>,
}

impl PortableLookup {
    pub fn new(types: impl IntoIterator<Item = (TypeId, LookupType)>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeLookup for PortableLookup {
    fn type_def(&self, id: TypeId) -> Option<TypeDef> {
        self.types.get(&id).map(|ty| ty.def.clone())
    }

    fn variants(&self, id: TypeId) -> Option<Vec<CallVariant>> {
        self.types.get(&id).and_then(|ty| ty.variants.clone())
    }
}

/// Pallets together with the lookup their call types live in
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct RuntimeMetadata {
    #[serde(default)]
    pub pallets: Vec<PalletMetadata>,
    #[serde(default)]
    pub types: PortableLookup,
}
