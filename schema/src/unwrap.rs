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

//! Matchers for generic wrapper types and tuples in metadata type strings

pub const OPTION: &str = "Option";
pub const VEC: &str = "Vec";
pub const COMPACT: &str = "Compact";

/// Match `type_name` against `Wrapper<Inner>` spanning the whole string and return `Inner`.
///
/// The match is purely textual: `Option<u8` or `Option<u8>x` do not match, and neither does an
/// empty inner type.
pub fn try_unwrap<'a>(wrapper: &str, type_name: &'a str) -> Option<&'a str> {
    let inner = type_name.strip_prefix(wrapper)?.strip_prefix('<')?.strip_suffix('>')?;
    (!inner.is_empty()).then_some(inner)
}

/// Split a tuple type `(A, B, ..)` into its element types.
///
/// Commas nested inside brackets of any kind belong to the element they appear in. Returns
/// `None` for anything that is not a well-formed parenthesized list of non-empty elements,
/// including the unit type `()`.
pub fn split_tuple(type_name: &str) -> Option<Vec<&str>> {
    let inner = type_name.strip_prefix('(')?.strip_suffix(')')?;

    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '(' | '<' | '[' => depth += 1,
            ')' | '>' | ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                elements.push(inner[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    elements.push(inner[start..].trim());

    if elements.iter().any(|elem| elem.is_empty()) {
        return None;
    }
    Some(elements)
}
