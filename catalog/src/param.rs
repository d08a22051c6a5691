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

use openrpc_schema::SchemaDescriptor;

/// A described parameter of an RPC method or a runtime call
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParamDescriptor {
    pub name: String,
    pub description: String,
    /// Type name the schema was resolved from
    #[serde(rename = "type")]
    pub source_type: String,
    pub required: bool,
    pub schema: SchemaDescriptor,
}
