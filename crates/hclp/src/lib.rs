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

//! # HCLP - HashiCorp Configuration Language parser
//!
//! HCLP parses HCL configuration text into an immutable syntax tree and
//! offers two independent projections over it: an insertion-ordered map
//! (and JSON) view, and re-serialized HCL text.
//!
//! ## Quick Start
//!
//! ```rust
//! use hclp::{parse, to_json, to_hcl};
//!
//! let config = r#"
//! resource "aws_instance" "web" {
//!   count = 2
//!   ami   = "${var.ami_id}"
//! }
//! "#;
//!
//! // Parse into a syntax tree
//! let doc = parse(config).expect("failed to parse");
//!
//! // Project onto an ordered map, serialized as JSON
//! let json = to_json(&doc).expect("failed to project");
//! assert!(json.contains("\"aws_instance\""));
//!
//! // Serialize the tree back to HCL text
//! let text = to_hcl(&doc).expect("failed to export");
//! assert!(text.starts_with("resource \"aws_instance\" \"web\" {"));
//! ```
//!
//! ## Semantics
//!
//! - Sibling blocks with an identical label path project to an ordered
//!   list of objects; blocks sharing only a label prefix merge under one
//!   parent object.
//! - Boolean and number literals keep their raw lexeme in the tree and are
//!   coerced only when a projection consumes them.
//! - `${...}` interpolation sequences are preserved verbatim, never
//!   evaluated.
//!
//! ## Modules
//!
//! - [`lex`]: streaming tokenizer and source positions
//! - [`map`]: ordered-map and JSON projection
//! - [`write`]: HCL text serialization

// Re-export core types
pub use hclp_core::{
    parse,
    parse_file,
    parse_reader,
    Document,
    HclError,
    HclErrorKind,
    HclResult,
    Node,
    NodeId,
    NodeKind,
    Value,
};

// Re-export the default projections at the top level
pub use hclp_map::{to_json, to_json_pretty, to_map, to_map_value};
pub use hclp_write::{to_hcl, to_hcl_with_config};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export lexer utilities
pub mod lex {
    //! Lexical analysis utilities
    pub use hclp_core::lex::{Lexer, SourcePos, Span, Token, TokenKind};
}

// Re-export map projection
pub mod map {
    //! Ordered-map and JSON projection
    pub use hclp_map::{to_json, to_json_pretty, to_map, to_map_value};
}

// Re-export text serialization
pub mod write {
    //! HCL text serialization
    pub use hclp_write::{to_hcl, to_hcl_with_config, IndentStyle, WriteConfig};
}

/// Parses `input` and reports the first error, if any.
///
/// Convenience for callers that only need a syntax check.
///
/// # Examples
///
/// ```
/// assert!(hclp::validate("a { b = 1 }").is_ok());
/// assert!(hclp::validate("a { b = ").is_err());
/// ```
pub fn validate(input: &str) -> HclResult<()> {
    parse(input).map(|_| ())
}
