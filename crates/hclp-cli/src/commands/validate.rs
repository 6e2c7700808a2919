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

//! Validate command - HCL file syntax validation

use super::read_file;
use colored::Colorize;
use hclp_core::parse;

/// Validate an HCL file for lexical and syntax correctness.
///
/// Parses the file and prints a short structural summary on success. On
/// failure, the error message carries the line and column of the first
/// problem.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or contains a lexical or
/// syntax error.
pub fn validate(file: &str) -> Result<(), String> {
    let content = read_file(file)?;

    match parse(&content) {
        Ok(doc) => {
            let blocks = doc.iter_roots().filter(|n| n.is_block()).count();
            let attributes = doc.roots().len() - blocks;
            println!("{} {}", "✓".green().bold(), file);
            println!("  Top-level blocks: {}", blocks);
            println!("  Top-level attributes: {}", attributes);
            println!("  Nodes: {}", doc.len());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(format!("{}", e))
        }
    }
}
