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

//! Source position and span tracking for lexical analysis.
//!
//! Every token and syntax-tree node carries a [`SourcePos`] so that errors
//! can report precise line, column, and byte-offset information.

use std::fmt;

/// A position in source text.
///
/// Line and column numbers are 1-indexed; the byte offset is 0-indexed.
///
/// # Examples
///
/// ```
/// use hclp_core::lex::SourcePos;
///
/// let pos = SourcePos::new(3, 7, 42);
/// assert_eq!(pos.line(), 3);
/// assert_eq!(pos.column(), 7);
/// assert_eq!(pos.offset(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePos {
    line: usize,
    column: usize,
    offset: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Creates a position at the start of the input (line 1, column 1).
    #[inline]
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the 1-indexed line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-indexed column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-indexed byte offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A contiguous region of source text: a start position plus a byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: SourcePos,
    len: usize,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: SourcePos, len: usize) -> Self {
        Self { start, len }
    }

    /// Creates a zero-length span at a position.
    #[inline]
    pub const fn point(start: SourcePos) -> Self {
        Self { start, len: 0 }
    }

    /// Returns the start position.
    #[inline]
    pub const fn start(&self) -> SourcePos {
        self.start
    }

    /// Returns the byte length of the spanned text.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the span covers no text.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte offset one past the end of the span.
    #[inline]
    pub const fn end_offset(&self) -> usize {
        self.start.offset() + self.len
    }

    /// Extends this span so it ends at `end_offset`.
    ///
    /// Used by the parser to grow a node's span as tokens are consumed.
    #[inline]
    pub fn extend_to(&mut self, end_offset: usize) {
        if end_offset > self.start.offset() {
            self.len = end_offset - self.start.offset();
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
