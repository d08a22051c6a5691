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

//! Error handling for document generation

/// Document generation error.
///
/// Type resolution itself never fails, unknown types degrade to schema references. Only turning
/// the finished document into text can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generated document is not valid JSON: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    #[error("Failed to serialize the document: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
