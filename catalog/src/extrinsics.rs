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

use heck::ToLowerCamelCase;
use itertools::Itertools;
use logging::log;
use openrpc_schema::{Resolution, TypeResolver};

use crate::{
    map_name, sanitize_description, CallField, PalletMetadata, ParamDescriptor, TypeLookup,
};

/// A runtime call with its description
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CallMethod {
    /// Documentation lines as found in the metadata
    pub docs: Vec<String>,
    pub name: String,
    pub params: Vec<ParamDescriptor>,
}

/// A described runtime call (extrinsic) of a pallet
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrinsicEntry {
    pub method: CallMethod,
    pub pallet_name: String,
    /// Documentation lines joined and sanitized
    pub description: String,
}

/// The type name a call field is resolved under.
///
/// That is the type name from the runtime source if the field has one. Otherwise the lookup's
/// type string if it comes straight from the registry, and the lookup alias if not.
pub fn call_field_type_name(lookup: &impl TypeLookup, field: &CallField) -> String {
    if let Some(type_name) = &field.type_name {
        return type_name.clone();
    }

    match lookup.type_def(field.ty) {
        Some(def) if def.is_from_si => def.type_string,
        Some(def) => def.lookup_name.unwrap_or(def.type_string),
        None => {
            log::warn!("Type {} of a call field is missing from the type lookup", field.ty);
            format!("Lookup{}", field.ty)
        }
    }
}

fn map_call_field(
    lookup: &impl TypeLookup,
    index: usize,
    field: &CallField,
    resolver: &mut TypeResolver,
) -> ParamDescriptor {
    let type_name = call_field_type_name(lookup, field);
    let Resolution {
        required,
        descriptor,
    } = resolver.resolve_call_field(&type_name);

    let name = match &field.name {
        Some(name) => map_name(name),
        None => format!("param{index}"),
    };

    ParamDescriptor {
        name,
        description: String::new(),
        source_type: type_name,
        required,
        schema: descriptor,
    }
}

/// Build entries for the calls of all pallets.
///
/// Pallets without calls are skipped. Pallets are ordered by name, calls within a pallet by their
/// (camel-cased) name, and fields keep their declaration order.
pub fn build_extrinsic_catalog(
    lookup: &impl TypeLookup,
    pallets: &[PalletMetadata],
    resolver: &mut TypeResolver,
) -> Vec<ExtrinsicEntry> {
    let pallets = pallets
        .iter()
        .filter_map(|pallet| pallet.calls.map(|calls| (pallet, calls)))
        .sorted_by(|(a, _), (b, _)| a.name.cmp(&b.name));

    let mut entries = Vec::new();

    for (pallet, calls_ty) in pallets {
        let Some(variants) = lookup.variants(calls_ty) else {
            log::warn!(
                "Calls type {calls_ty} of pallet `{}` is not an enum in the type lookup",
                pallet.name
            );
            continue;
        };

        let pallet_name = pallet.name.to_lower_camel_case();
        log::debug!("Describing {} calls of pallet `{pallet_name}`", variants.len());

        let calls = variants
            .into_iter()
            .map(|variant| (variant.name.to_lower_camel_case(), variant))
            .sorted_by(|(a, _), (b, _)| a.cmp(b));

        for (name, variant) in calls {
            let params = variant
                .fields
                .iter()
                .enumerate()
                .map(|(index, field)| map_call_field(lookup, index, field, resolver))
                .collect();
            let description = sanitize_description(&variant.docs.join(" "));

            entries.push(ExtrinsicEntry {
                method: CallMethod {
                    docs: variant.docs,
                    name,
                    params,
                },
                pallet_name: pallet_name.clone(),
                description,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{RuntimeMetadata, TypeDef, TypeId};

    fn metadata(value: serde_json::Value) -> RuntimeMetadata {
        serde_json::from_value(value).unwrap()
    }

    fn field(ty: u32, type_name: Option<&str>) -> CallField {
        CallField {
            name: None,
            ty: TypeId(ty),
            type_name: type_name.map(str::to_owned),
        }
    }

    #[test]
    fn field_type_names() {
        let metadata = metadata(json!({
            "types": {
                "1": {"type": "u128", "isFromSi": true, "lookupName": "Ignored"},
                "2": {"type": "{\"who\":\"AccountId32\"}", "lookupName": "PalletInfo"},
                "3": {"type": "Vec<u8>"},
            },
        }));
        let lookup = &metadata.types;

        assert_eq!(call_field_type_name(lookup, &field(1, Some("Balance"))), "Balance");
        assert_eq!(call_field_type_name(lookup, &field(1, None)), "u128");
        assert_eq!(call_field_type_name(lookup, &field(2, None)), "PalletInfo");
        assert_eq!(call_field_type_name(lookup, &field(3, None)), "Vec<u8>");
        assert_eq!(call_field_type_name(lookup, &field(42, None)), "Lookup42");
        assert_eq!(
            lookup.type_def(TypeId(3)),
            Some(TypeDef {
                type_string: "Vec<u8>".to_owned(),
                is_from_si: false,
                lookup_name: None,
            })
        );
    }

    #[test]
    fn pallets_and_calls_sorted() {
        let metadata = metadata(json!({
            "pallets": [
                {"name": "System"},
                {"name": "Balances", "calls": 10},
                {"name": "Assets", "calls": 20},
            ],
            "types": {
                "10": {"type": "PalletBalancesCall", "variants": [
                    {"name": "transfer_keep_alive"},
                    {"name": "force_transfer"},
                    {"name": "transfer_all"},
                ]},
                "20": {"type": "PalletAssetsCall", "variants": [
                    {"name": "create"},
                ]},
            },
        }));

        let mut resolver = TypeResolver::new();
        let entries = build_extrinsic_catalog(&metadata.types, &metadata.pallets, &mut resolver);

        let names = entries
            .iter()
            .map(|e| (e.pallet_name.as_str(), e.method.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                ("assets", "create"),
                ("balances", "forceTransfer"),
                ("balances", "transferAll"),
                ("balances", "transferKeepAlive"),
            ],
        );
    }

    #[test]
    fn unknown_calls_type_skipped() {
        let metadata = metadata(json!({
            "pallets": [{"name": "Broken", "calls": 5}],
            "types": {"5": {"type": "u8", "isFromSi": true}},
        }));

        let mut resolver = TypeResolver::new();
        let entries = build_extrinsic_catalog(&metadata.types, &metadata.pallets, &mut resolver);
        assert!(entries.is_empty());
    }

    #[test]
    fn call_params() {
        let metadata = metadata(json!({
            "pallets": [{"name": "Utility", "calls": 0}],
            "types": {
                "0": {"type": "PalletUtilityCall", "variants": [{
                    "name": "as_derivative",
                    "docs": [" Send a call through an indexed pseudonym.", "", " \u{1}Done."],
                    "fields": [
                        {"name": "index", "type": 1, "typeName": "u16"},
                        {"name": "class", "type": 2},
                        {"name": "new", "type": 3, "typeName": "Option<Vec<u8>>"},
                        {"type": 4},
                        {"name": "amount", "type": 5, "typeName": "Compact<u128>"},
                    ],
                }]},
                "1": {"type": "u16", "isFromSi": true},
                "2": {"type": "(u32,bool)", "isFromSi": true},
                "3": {"type": "Option<Bytes>", "isFromSi": true},
                "4": {"type": "Vec<AccountId32>", "isFromSi": true},
                "5": {"type": "Compact<u128>", "isFromSi": true},
            },
        }));

        let mut resolver = TypeResolver::new();
        let entries = build_extrinsic_catalog(&metadata.types, &metadata.pallets, &mut resolver);
        assert_eq!(entries.len(), 1);

        assert_eq!(
            serde_json::to_value(&entries[0]).unwrap(),
            json!({
                "method": {
                    "docs": [" Send a call through an indexed pseudonym.", "", " \u{1}Done."],
                    "name": "asDerivative",
                    "params": [
                        {
                            "name": "index",
                            "description": "",
                            "type": "u16",
                            "required": true,
                            "schema": {"$ref": "#/components/schemas/u16"},
                        },
                        {
                            "name": "clazz",
                            "description": "",
                            "type": "(u32,bool)",
                            "required": true,
                            "schema": {
                                "type": "array",
                                "items": [
                                    {"$ref": "#/components/schemas/u32"},
                                    {"type": "boolean"},
                                ],
                            },
                        },
                        {
                            "name": "updated",
                            "description": "",
                            "type": "Option<Vec<u8>>",
                            "required": false,
                            "schema": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/u8"},
                            },
                        },
                        {
                            "name": "param3",
                            "description": "",
                            "type": "Vec<AccountId32>",
                            "required": true,
                            "schema": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/AccountId32"},
                            },
                        },
                        {
                            "name": "amount",
                            "description": "",
                            "type": "Compact<u128>",
                            "required": false,
                            "schema": {"$ref": "#/components/schemas/u128"},
                        },
                    ],
                },
                "palletName": "utility",
                "description": " Send a call through an indexed pseudonym.    Done.",
            }),
        );

        let catalog = resolver.catalog();
        assert!(catalog.contains("(u32,bool)"));
        assert!(catalog.contains("Option<Vec<u8>>"));
        assert!(!catalog.contains("AccountId32"));
    }
}
