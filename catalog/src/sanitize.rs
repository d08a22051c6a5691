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

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything outside of the characters the downstream templates handle verbatim
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^A-Za-z0-9., #:;\[_%\]/*\->&'"`~<\^$)(@!]"#).expect("valid regex")
});

/// Replace each character outside of the allowed set with a single space.
pub fn sanitize_description(description: &str) -> String {
    DISALLOWED_CHARS.replace_all(description, " ").into_owned()
}
