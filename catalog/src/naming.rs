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

/// Identifiers renamed after camel-casing, so they do not clash with reserved words
const MAPPED_NAMES: &[(&str, &str)] = &[("class", "clazz"), ("new", "updated")];

/// Parameter name for a declared field name: lower camel case, with reserved words replaced.
pub fn map_name(declared: &str) -> String {
    let name = declared.to_lower_camel_case();
    MAPPED_NAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |(_, to)| to.to_string())
}
