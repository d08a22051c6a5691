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

use assert_cmd::Command;
use serde_json::json;

fn write_json(
    dir: &tempfile::TempDir,
    name: &str,
    value: serde_json::Value,
) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn generates_document_file() {
    let dir = tempfile::tempdir().unwrap();

    let rpc = write_json(
        &dir,
        "rpc.json",
        json!({"interfaces/state": {"rpc": {
            "getStorage": {
                "params": [{"name": "key", "type": "StorageKey"}],
                "type": "StorageData",
            },
        }}}),
    );
    let metadata = write_json(
        &dir,
        "metadata.json",
        json!({
            "pallets": [{"name": "Timestamp", "calls": 0}],
            "types": {
                "0": {"type": "PalletTimestampCall", "variants": [{
                    "name": "set",
                    "docs": [" Set the current time."],
                    "fields": [{"name": "now", "type": 1, "typeName": "T::Moment"}],
                }]},
                "1": {"type": "Compact<u64>", "isFromSi": true},
            },
        }),
    );
    let output = dir.path().join("openrpc.json");

    Command::cargo_bin("openrpc-gen")
        .unwrap()
        .arg("--rpc-definitions")
        .arg(&rpc)
        .arg("--metadata")
        .arg(&metadata)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(doc["methods"][0]["pallet"], "state");
    assert_eq!(doc["methods"][0]["name"], "getStorage");
    assert_eq!(doc["extrinsics"][0]["palletName"], "timestamp");
    assert_eq!(doc["extrinsics"][0]["method"]["params"][0]["type"], "T::Moment");
    assert_eq!(doc["schemas"]["StorageKey"], json!({}));
}

#[test]
fn empty_inputs_print_builtin_schemas() {
    let assert = Command::cargo_bin("openrpc-gen").unwrap().arg("--compact").assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(doc["methods"], json!([]));
    assert_eq!(doc["extrinsics"], json!([]));
    assert_eq!(doc["schemas"]["u32"], json!({"type": "integer"}));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("openrpc-gen")
        .unwrap()
        .arg("--metadata")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure();
}
