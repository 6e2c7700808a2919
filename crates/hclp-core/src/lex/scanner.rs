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

//! Single-pass HCL tokenizer.
//!
//! [`Lexer`] scans source text into a lazy, finite stream of [`Token`]s via
//! the `Iterator` interface. Whitespace and newlines only separate tokens;
//! line comments (`#`, `//`) and block comments (`/* */`) are discarded.
//! Interpolation sequences (`${...}`) inside string literals are captured
//! verbatim and never interpreted.
//!
//! # Examples
//!
//! ```
//! use hclp_core::lex::{Lexer, TokenKind};
//!
//! let tokens: Result<Vec<_>, _> = Lexer::new("port = 8080").collect();
//! let tokens = tokens.unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].kind, TokenKind::Equals);
//! ```

use crate::error::{HclError, HclResult};
use crate::lex::{SourcePos, Token, TokenKind};
use memchr::memchr;

/// Returns `true` for characters that may start an identifier.
#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for characters that may continue an identifier.
///
/// Dots and dashes are legal mid-identifier in HCL (`aws_instance.web`).
#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

/// A lazy, non-restartable tokenizer over HCL source text.
///
/// The iterator yields `HclResult<Token>`; after the first error (or after
/// end of input) it yields `None` forever.
pub struct Lexer<'a> {
    src: &'a str,
    at: usize,
    line: usize,
    column: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            at: 0,
            line: 1,
            column: 1,
            done: false,
        }
    }

    /// Current position of the cursor.
    #[inline]
    fn pos(&self) -> SourcePos {
        SourcePos::new(self.line, self.column, self.at)
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.src[self.at..].chars().next()
    }

    #[inline]
    fn peek_byte_at(&self, ahead: usize) -> Option<u8> {
        self.src.as_bytes().get(self.at + ahead).copied()
    }

    /// Consumes one character, updating line/column tracking.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.at += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skips whitespace and comments up to the next token or end of input.
    fn skip_trivia(&mut self) -> HclResult<()> {
        loop {
            match self.peek_byte_at(0) {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.bump();
                }
                Some(b'#') => self.skip_line_comment(),
                Some(b'/') if self.peek_byte_at(1) == Some(b'/') => self.skip_line_comment(),
                Some(b'/') if self.peek_byte_at(1) == Some(b'*') => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips to (but not past) the next newline.
    fn skip_line_comment(&mut self) {
        let rest = &self.src.as_bytes()[self.at..];
        let skip = memchr(b'\n', rest).unwrap_or(rest.len());
        self.column += self.src[self.at..self.at + skip].chars().count();
        self.at += skip;
    }

    fn skip_block_comment(&mut self) -> HclResult<()> {
        let start = self.pos();
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                Some('*') if self.peek_byte_at(0) == Some(b'/') => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(HclError::lexical("unterminated block comment", start));
                }
            }
        }
    }

    fn next_token(&mut self) -> HclResult<Option<Token>> {
        self.skip_trivia()?;
        let start = self.pos();
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };

        let kind = match c {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '=' => TokenKind::Equals,
            ',' => TokenKind::Comma,
            '"' => return self.scan_string(start).map(Some),
            '-' | '0'..='9' => return self.scan_number(start).map(Some),
            c if is_ident_start(c) => return Ok(Some(self.scan_identifier(start))),
            other => {
                return Err(HclError::lexical(
                    format!("unrecognized character '{}'", other),
                    start,
                ));
            }
        };
        self.bump();
        Ok(Some(Token::new(kind, start, 1)))
    }

    fn scan_identifier(&mut self, start: SourcePos) -> Token {
        while self.peek_char().is_some_and(is_ident_continue) {
            self.bump();
        }
        let text = &self.src[start.offset()..self.at];
        let kind = match text {
            "true" | "false" => TokenKind::Bool(text.to_string()),
            _ => TokenKind::Identifier(text.to_string()),
        };
        Token::new(kind, start, self.at - start.offset())
    }

    /// Consumes a run of ASCII digits, returning whether any was seen.
    fn digits(&mut self) -> bool {
        let mut seen = false;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            seen = true;
        }
        seen
    }

    fn scan_number(&mut self, start: SourcePos) -> HclResult<Token> {
        if self.peek_char() == Some('-') {
            self.bump();
        }
        if !self.digits() {
            return Err(HclError::lexical("malformed number literal", start));
        }
        if self.peek_char() == Some('.') {
            self.bump();
            if !self.digits() {
                return Err(HclError::lexical("malformed number literal", start));
            }
        }
        if matches!(self.peek_char(), Some('e') | Some('E')) {
            self.bump();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.bump();
            }
            if !self.digits() {
                return Err(HclError::lexical("malformed number literal", start));
            }
        }
        // A trailing identifier character means the literal is junk, not two
        // adjacent tokens: `12ab` and `1.2.3` both fail here.
        if self.peek_char().is_some_and(is_ident_continue) || self.peek_char() == Some('.') {
            return Err(HclError::lexical("malformed number literal", start));
        }
        let raw = self.src[start.offset()..self.at].to_string();
        Ok(Token::new(
            TokenKind::Number(raw),
            start,
            self.at - start.offset(),
        ))
    }

    fn scan_string(&mut self, start: SourcePos) -> HclResult<Token> {
        self.bump(); // opening quote
        let mut buf = String::new();
        loop {
            let c = match self.bump() {
                Some(c) => c,
                None => {
                    return Err(HclError::lexical("unterminated string literal", start));
                }
            };
            match c {
                '"' => break,
                '\n' => {
                    return Err(HclError::lexical("unterminated string literal", start));
                }
                '\\' => self.scan_escape(&mut buf, start)?,
                '$' if self.peek_char() == Some('{') => {
                    self.scan_interpolation(&mut buf, start)?;
                }
                other => buf.push(other),
            }
        }
        Ok(Token::new(
            TokenKind::Str(buf),
            start,
            self.at - start.offset(),
        ))
    }

    fn scan_escape(&mut self, buf: &mut String, start: SourcePos) -> HclResult<()> {
        let e = match self.bump() {
            Some(e) => e,
            None => {
                return Err(HclError::lexical("unterminated string literal", start));
            }
        };
        match e {
            'n' => buf.push('\n'),
            't' => buf.push('\t'),
            'r' => buf.push('\r'),
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = self
                        .bump()
                        .and_then(|c| c.to_digit(16))
                        .ok_or_else(|| HclError::lexical("invalid unicode escape", start))?;
                    code = code * 16 + digit;
                }
                let decoded = char::from_u32(code)
                    .ok_or_else(|| HclError::lexical("invalid unicode escape", start))?;
                buf.push(decoded);
            }
            // Unknown escapes keep the escaped character itself.
            other => buf.push(other),
        }
        Ok(())
    }

    /// Captures a `${...}` sequence verbatim, honoring nested braces.
    ///
    /// The leading `$` has already been consumed by the caller; quotes and
    /// escapes inside the interpolation are copied through untouched.
    fn scan_interpolation(&mut self, buf: &mut String, start: SourcePos) -> HclResult<()> {
        buf.push('$');
        self.bump(); // '{'
        buf.push('{');
        let mut depth = 1usize;
        loop {
            let c = match self.bump() {
                Some(c) => c,
                None => {
                    return Err(HclError::lexical("unterminated string literal", start));
                }
            };
            buf.push(c);
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = HclResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
