// HCLP - HashiCorp Configuration Language parser for Rust
//
// Copyright (c) 2025 the HCLP contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion command - HCL to JSON projection

use super::{read_file, write_output};
use hclp_core::parse;

/// Convert an HCL file to JSON.
///
/// Projects the document onto an insertion-ordered map and serializes it.
/// Sibling blocks with an identical label path come out as a JSON array;
/// blocks sharing only a label prefix merge under one object.
///
/// # Arguments
///
/// * `file` - path to the HCL file to convert
/// * `output` - optional output file path; `None` writes to stdout
/// * `pretty` - pretty-print the JSON with indentation
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, fails to parse, fails to
/// project (structural merge or coercion error), or the output cannot be
/// written.
pub fn to_json(file: &str, output: Option<&str>, pretty: bool) -> Result<(), String> {
    let content = read_file(file)?;
    let doc = parse(&content).map_err(|e| format!("Parse error: {}", e))?;

    let json = if pretty {
        hclp_map::to_json_pretty(&doc)
    } else {
        hclp_map::to_json(&doc)
    }
    .map_err(|e| format!("Projection error: {}", e))?;

    let mut out = json;
    out.push('\n');
    write_output(&out, output)
}
