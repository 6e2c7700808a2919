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

//! HCL Command Line Interface

use clap::Parser;
use hclp_cli::cli::Commands;
use std::process::ExitCode;

/// HCL configuration toolkit
///
/// Validate HCL files, project them onto JSON, and reformat them.
///
/// # Examples
///
/// ```bash
/// # Validate an HCL file
/// hclp validate main.tf
///
/// # Convert HCL to pretty-printed JSON
/// hclp to-json main.tf --pretty
///
/// # Reformat an HCL file
/// hclp fmt main.tf --output formatted.tf
/// ```
#[derive(Parser)]
#[command(name = "hclp")]
#[command(author, version, about = "HCL configuration toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
