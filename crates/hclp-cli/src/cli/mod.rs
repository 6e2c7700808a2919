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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::Subcommand;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate an HCL file
    ///
    /// Parses the file and reports the first lexical or syntax error, with
    /// line and column information.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Convert an HCL file to JSON
    ///
    /// Projects the parsed document onto an insertion-ordered map. Sibling
    /// blocks with identical label paths become JSON arrays.
    ToJson {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Reformat an HCL file
    ///
    /// Rewrites the file in the writer's canonical layout. Comments and the
    /// original spacing are not preserved.
    Fmt {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if the file is not already formatted)
        #[arg(short, long)]
        check: bool,

        /// Indent with the given number of spaces instead of tabs
        #[arg(long, value_name = "N")]
        spaces: Option<usize>,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns an error message when file I/O, parsing, projection, or
    /// output writing fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Validate { file } => commands::validate(&file),
            Commands::ToJson {
                file,
                output,
                pretty,
            } => commands::to_json(&file, output.as_deref(), pretty),
            Commands::Fmt {
                file,
                output,
                check,
                spaces,
            } => commands::fmt(&file, output.as_deref(), check, spaces),
        }
    }
}
