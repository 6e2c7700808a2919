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

//! Lexical tokens produced by the HCL scanner.

use crate::lex::SourcePos;
use std::fmt;

/// The kind of a lexical token.
///
/// String literals carry their escape-processed text (with `${...}`
/// interpolation sequences preserved verbatim). Boolean and number literals
/// carry their raw lexeme; coercion to `bool`/`f64` happens later, when a
/// projection actually consumes the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare identifier, e.g. `resource`.
    Identifier(String),
    /// A double-quoted string literal, escapes already processed.
    Str(String),
    /// A numeric literal, raw lexeme.
    Number(String),
    /// A boolean literal, raw lexeme (`true` or `false`).
    Bool(String),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `=`
    Equals,
    /// `,`
    Comma,
}

impl TokenKind {
    /// A short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier '{}'", name),
            Self::Str(_) => "string literal".to_string(),
            Self::Number(raw) => format!("number '{}'", raw),
            Self::Bool(raw) => format!("boolean '{}'", raw),
            Self::LeftBrace => "'{'".to_string(),
            Self::RightBrace => "'}'".to_string(),
            Self::LeftBracket => "'['".to_string(),
            Self::RightBracket => "']'".to_string(),
            Self::Equals => "'='".to_string(),
            Self::Comma => "','".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A token with its source position and byte length.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind and payload.
    pub kind: TokenKind,
    /// Position of the token's first byte.
    pub pos: SourcePos,
    /// Byte length of the lexeme in the source text.
    pub len: usize,
}

impl Token {
    /// Creates a new token.
    #[inline]
    pub fn new(kind: TokenKind, pos: SourcePos, len: usize) -> Self {
        Self { kind, pos, len }
    }

    /// Returns the byte offset one past the end of the token.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.pos.offset() + self.len
    }
}
