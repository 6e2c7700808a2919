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

//! Core tokenizer, parser, and syntax tree for the HCL configuration format.
//!
//! This crate turns HCL source text into an immutable [`Document`]: a flat
//! arena of block and attribute nodes addressed by [`NodeId`]. Downstream
//! crates project the tree onto maps (`hclp-map`) or serialize it back to
//! text (`hclp-write`).
//!
//! # Examples
//!
//! ```
//! use hclp_core::parse;
//!
//! let doc = parse(r#"
//!     resource "aws_instance" "web" {
//!       count = 2
//!       ami   = "${var.ami_id}"
//!     }
//! "#).unwrap();
//!
//! let block = doc.node(doc.roots()[0]);
//! assert_eq!(block.labels().unwrap().len(), 3);
//! assert_eq!(block.children().len(), 2);
//! ```
//!
//! # Lexical Analysis
//!
//! The [`lex`] module exposes the streaming tokenizer directly for callers
//! that want tokens without building a tree: [`lex::Lexer`] implements
//! `Iterator<Item = HclResult<Token>>` and fuses after the first error.

mod document;
mod error;
pub mod lex;
mod parser;
mod value;

pub use document::{Document, Node, NodeId, NodeKind};
pub use error::{HclError, HclErrorKind, HclResult};
pub use parser::{parse, parse_file, parse_reader};
pub use value::Value;

// Commonly used lex types, re-exported at the crate root.
pub use lex::{SourcePos, Span, Token, TokenKind};
