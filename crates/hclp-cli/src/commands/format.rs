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

//! Fmt command - HCL reformatting

use super::{read_file, write_output};
use hclp_core::parse;
use hclp_write::{to_hcl_with_config, IndentStyle, WriteConfig};

/// Reformat an HCL file to the writer's canonical layout.
///
/// Comments and original spacing are not preserved; the output projects to
/// the same map as the input.
///
/// # Arguments
///
/// * `file` - path to the HCL file to reformat
/// * `output` - optional output file path; `None` writes to stdout
/// * `check` - only check whether the file is already formatted
/// * `spaces` - indent with this many spaces per level instead of tabs
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, if a raw literal
/// fails coercion during export, in check mode if the file is not already
/// formatted, or if the output cannot be written.
pub fn fmt(
    file: &str,
    output: Option<&str>,
    check: bool,
    spaces: Option<usize>,
) -> Result<(), String> {
    let content = read_file(file)?;
    let doc = parse(&content).map_err(|e| format!("Parse error: {}", e))?;

    let indent = match spaces {
        Some(width) => IndentStyle::Spaces(width),
        None => IndentStyle::Tabs,
    };
    let config = WriteConfig::new().with_indent(indent);
    let formatted =
        to_hcl_with_config(&doc, &config).map_err(|e| format!("Export error: {}", e))?;

    if check {
        if content == formatted {
            println!("{} is formatted", file);
            Ok(())
        } else {
            Err(format!("'{}' is not formatted", file))
        }
    } else {
        write_output(&formatted, output)
    }
}
