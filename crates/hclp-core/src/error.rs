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

//! Error types for HCL parsing and projection.

use crate::lex::SourcePos;
use std::fmt;
use thiserror::Error;

/// The kind of failure that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HclErrorKind {
    /// Malformed token (unterminated string, bad number, stray character).
    Lexical,
    /// Grammar violation (unmatched braces, missing `=`, bad label list).
    Syntax,
    /// A block's label path collides with an incompatible existing value
    /// during map projection.
    StructuralMerge,
    /// A raw boolean/number lexeme failed to parse when consumed.
    ValueCoercion,
    /// Input could not be read.
    Io,
}

impl fmt::Display for HclErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "LexicalError"),
            Self::Syntax => write!(f, "SyntaxError"),
            Self::StructuralMerge => write!(f, "StructuralMergeError"),
            Self::ValueCoercion => write!(f, "ValueCoercionError"),
            Self::Io => write!(f, "IoError"),
        }
    }
}

/// An error raised while parsing, projecting, or exporting HCL.
///
/// Lexical and syntax errors carry a 1-indexed line/column plus a byte
/// offset; projection, coercion, and I/O errors have no source position
/// (line and column are 0).
#[derive(Debug, Clone, Error)]
#[error("{}", render(.kind, .message, .line, .column))]
pub struct HclError {
    /// The kind of error.
    pub kind: HclErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; 0 when no position applies).
    pub line: usize,
    /// Column number (1-based; 0 when no position applies).
    pub column: usize,
    /// Byte offset into the input, when known.
    pub offset: Option<usize>,
}

impl HclError {
    /// Creates an error with no source position.
    pub fn new(kind: HclErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: 0,
            column: 0,
            offset: None,
        }
    }

    /// Creates an error anchored at a source position.
    pub fn at(kind: HclErrorKind, message: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            message: message.into(),
            line: pos.line(),
            column: pos.column(),
            offset: Some(pos.offset()),
        }
    }

    /// Malformed token.
    pub fn lexical(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::at(HclErrorKind::Lexical, message, pos)
    }

    /// Grammar violation.
    pub fn syntax(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::at(HclErrorKind::Syntax, message, pos)
    }

    /// Incompatible value met while walking a block label path.
    pub fn structural_merge(message: impl Into<String>) -> Self {
        Self::new(HclErrorKind::StructuralMerge, message)
    }

    /// Raw literal failed its deferred bool/number coercion.
    pub fn value_coercion(message: impl Into<String>) -> Self {
        Self::new(HclErrorKind::ValueCoercion, message)
    }

    /// Failed to read input.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(HclErrorKind::Io, message)
    }

    /// Returns `true` if this error carries a source position.
    pub fn has_position(&self) -> bool {
        self.line > 0
    }
}

fn render(kind: &HclErrorKind, message: &String, line: &usize, column: &usize) -> String {
    if *line > 0 {
        format!("{} at line {}, column {}: {}", kind, line, column, message)
    } else {
        format!("{}: {}", kind, message)
    }
}

impl From<std::io::Error> for HclError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}

/// Result type for HCL operations.
pub type HclResult<T> = Result<T, HclError>;
