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

//! Recursive-descent parser assembling the token stream into a [`Document`].
//!
//! The grammar is single-pass with one token of lookahead:
//!
//! ```text
//! document := element*
//! element  := IDENT "=" value
//!           | IDENT (IDENT | STRING)* "{" element* "}"
//! value    := STRING | NUMBER | BOOL
//!           | "[" (value ("," value)* ","?)? "]"
//!           | "{" (IDENT "=" value ","?)* "}"
//! ```
//!
//! Newlines never terminate anything; `=` and braces alone define structure.
//! Any failure aborts the whole parse — no partial document is returned.

use crate::document::{Document, Node, NodeId, NodeKind};
use crate::error::{HclError, HclResult};
use crate::lex::{Lexer, SourcePos, Span, Token, TokenKind};
use crate::value::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parses HCL source text into a [`Document`].
///
/// # Examples
///
/// ```
/// use hclp_core::parse;
///
/// let doc = parse("resource \"aws_instance\" \"web\" {\n  count = 2\n}").unwrap();
/// assert_eq!(doc.roots().len(), 1);
/// ```
///
/// # Errors
///
/// Returns a `Lexical` or `Syntax` error with position information on
/// malformed input.
pub fn parse(input: &str) -> HclResult<Document> {
    Parser::new(input).parse_document()
}

/// Parses HCL from a reader.
///
/// The stream is read to its end and must be valid UTF-8. The reader is
/// borrowed for the duration of the call and never closed; the caller owns
/// the underlying resource.
pub fn parse_reader<R: Read>(mut reader: R) -> HclResult<Document> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse(&buf)
}

/// Parses HCL from a UTF-8 file.
///
/// The file handle is opened and released inside this call, on success and
/// on every failure path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> HclResult<Document> {
    let input = fs::read_to_string(path)?;
    parse(&input)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
    nodes: Vec<Node>,
    /// Start position of the most recently consumed token, for errors at
    /// end of input.
    last_pos: SourcePos,
    /// Byte offset one past the most recently consumed token.
    last_end: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            peeked: None,
            nodes: Vec::new(),
            last_pos: SourcePos::start(),
            last_end: 0,
        }
    }

    fn peek(&mut self) -> HclResult<Option<&Token>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next().transpose()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn advance(&mut self) -> HclResult<Option<Token>> {
        let token = match self.peeked.take() {
            Some(t) => Some(t),
            None => self.lexer.next().transpose()?,
        };
        if let Some(t) = &token {
            self.last_pos = t.pos;
            self.last_end = t.end_offset();
        }
        Ok(token)
    }

    /// Consumes the next token if it matches `kind`.
    fn eat(&mut self, kind: &TokenKind) -> HclResult<bool> {
        let matches = matches!(self.peek()?, Some(t) if t.kind == *kind);
        if matches {
            self.advance()?;
        }
        Ok(matches)
    }

    /// Builds a syntax error describing the upcoming token (or end of input).
    fn unexpected(&mut self, expected: &str) -> HclError {
        match &self.peeked {
            Some(t) => HclError::syntax(
                format!("expected {}, found {}", expected, t.kind.describe()),
                t.pos,
            ),
            None => HclError::syntax(
                format!("expected {}, found end of input", expected),
                self.last_pos,
            ),
        }
    }

    fn parse_document(mut self) -> HclResult<Document> {
        let mut roots = Vec::new();
        while self.peek()?.is_some() {
            roots.push(self.parse_element(None)?);
        }
        Ok(Document {
            nodes: self.nodes,
            roots,
        })
    }

    fn parse_element(&mut self, parent: Option<NodeId>) -> HclResult<NodeId> {
        let token = match self.advance()? {
            Some(t) => t,
            None => return Err(self.unexpected("identifier")),
        };
        let (name, start) = match token.kind {
            TokenKind::Identifier(name) => (name, token.pos),
            other => {
                return Err(HclError::syntax(
                    format!("expected identifier, found {}", other.describe()),
                    token.pos,
                ));
            }
        };
        if self.eat(&TokenKind::Equals)? {
            let value = self.parse_value()?;
            let id = NodeId(self.nodes.len());
            let mut span = Span::point(start);
            span.extend_to(self.last_end);
            self.nodes.push(Node {
                kind: NodeKind::Attribute { name, value },
                span,
                parent,
                children: Vec::new(),
            });
            Ok(id)
        } else {
            self.parse_block(name, start, parent)
        }
    }

    fn parse_block(
        &mut self,
        first_label: String,
        start: SourcePos,
        parent: Option<NodeId>,
    ) -> HclResult<NodeId> {
        let mut labels = vec![first_label];
        loop {
            let token = match self.advance()? {
                Some(t) => t,
                None => {
                    return Err(HclError::syntax(
                        "expected '=' or a block body, found end of input",
                        self.last_pos,
                    ));
                }
            };
            match token.kind {
                TokenKind::Identifier(label) | TokenKind::Str(label) => labels.push(label),
                TokenKind::LeftBrace => break,
                other => {
                    return Err(HclError::syntax(
                        format!("expected block label or '{{', found {}", other.describe()),
                        token.pos,
                    ));
                }
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: NodeKind::Block { labels },
            span: Span::point(start),
            parent,
            children: Vec::new(),
        });

        let mut children = Vec::new();
        loop {
            if self.eat(&TokenKind::RightBrace)? {
                break;
            }
            if self.peek()?.is_none() {
                return Err(HclError::syntax(
                    "unmatched '{': expected '}' before end of input",
                    start,
                ));
            }
            children.push(self.parse_element(Some(id))?);
        }
        self.nodes[id.0].children = children;
        self.nodes[id.0].span.extend_to(self.last_end);
        Ok(id)
    }

    fn parse_value(&mut self) -> HclResult<Value> {
        let token = match self.advance()? {
            Some(t) => t,
            None => return Err(self.unexpected("a value")),
        };
        match token.kind {
            TokenKind::Str(s) => Ok(Value::String(s)),
            TokenKind::Number(raw) => Ok(Value::Number(raw)),
            TokenKind::Bool(raw) => Ok(Value::Bool(raw)),
            TokenKind::LeftBracket => self.parse_array(token.pos),
            TokenKind::LeftBrace => self.parse_inline_object(token.pos),
            other => Err(HclError::syntax(
                format!("expected a value, found {}", other.describe()),
                token.pos,
            )),
        }
    }

    fn parse_array(&mut self, open: SourcePos) -> HclResult<Value> {
        let mut items = Vec::new();
        loop {
            if self.eat(&TokenKind::RightBracket)? {
                break;
            }
            if self.peek()?.is_none() {
                return Err(HclError::syntax(
                    "unmatched '[': expected ']' before end of input",
                    open,
                ));
            }
            items.push(self.parse_value()?);
            // Separator: a comma (trailing comma tolerated) or the closer.
            if self.eat(&TokenKind::Comma)? {
                continue;
            }
            if self.eat(&TokenKind::RightBracket)? {
                break;
            }
            return Err(self.unexpected("',' or ']'"));
        }
        Ok(Value::Array(items))
    }

    fn parse_inline_object(&mut self, open: SourcePos) -> HclResult<Value> {
        let mut entries = Vec::new();
        loop {
            if self.eat(&TokenKind::RightBrace)? {
                break;
            }
            let token = match self.advance()? {
                Some(t) => t,
                None => {
                    return Err(HclError::syntax(
                        "unmatched '{': expected '}' before end of input",
                        open,
                    ));
                }
            };
            let key = match token.kind {
                TokenKind::Identifier(key) => key,
                other => {
                    return Err(HclError::syntax(
                        format!("expected map key identifier, found {}", other.describe()),
                        token.pos,
                    ));
                }
            };
            if !self.eat(&TokenKind::Equals)? {
                return Err(self.unexpected("'='"));
            }
            let value = self.parse_value()?;
            entries.push((key, value));
            self.eat(&TokenKind::Comma)?;
        }
        Ok(Value::Object(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HclErrorKind;
    use proptest::prelude::*;

    fn parse_err(input: &str) -> HclError {
        parse(input).expect_err("expected parse failure")
    }

    // ==================== Attribute tests ====================

    #[test]
    fn test_attribute_string() {
        let doc = parse("x = \"hi\"").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.name(), "x");
        assert_eq!(node.value().and_then(Value::as_str), Some("hi"));
    }

    #[test]
    fn test_attribute_number_keeps_raw_lexeme() {
        let doc = parse("n = 3.14").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.value(), Some(&Value::Number("3.14".to_string())));
    }

    #[test]
    fn test_attribute_bool_keeps_raw_lexeme() {
        let doc = parse("enabled = true").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.value(), Some(&Value::Bool("true".to_string())));
    }

    #[test]
    fn test_multiple_attributes_without_separators() {
        let doc = parse("a = 1 b = 2\nc = 3").unwrap();
        assert_eq!(doc.roots().len(), 3);
    }

    // ==================== Block tests ====================

    #[test]
    fn test_block_single_label() {
        let doc = parse("locals { a = 1 }").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.labels(), Some(&["locals".to_string()][..]));
    }

    #[test]
    fn test_block_quoted_labels() {
        let doc = parse("resource \"aws_instance\" \"web\" { }").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.labels().map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_block_bare_extra_labels() {
        // Labels after the first may be bare identifiers too.
        let doc = parse("variable region { default = \"us-east-1\" }").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(
            node.labels(),
            Some(&["variable".to_string(), "region".to_string()][..])
        );
    }

    #[test]
    fn test_block_empty_body() {
        let doc = parse("a { }").unwrap();
        assert!(doc.node(doc.roots()[0]).children().is_empty());
    }

    #[test]
    fn test_block_nested() {
        let doc = parse("a { b { c = 1 } d = 2 }").unwrap();
        let a = doc.node(doc.roots()[0]);
        assert_eq!(a.children().len(), 2);
        let b = doc.node(a.children()[0]);
        assert!(b.is_block());
        assert_eq!(b.children().len(), 1);
    }

    #[test]
    fn test_sibling_blocks_stay_separate_in_tree() {
        let doc = parse("a { b = 1 } a { b = 2 }").unwrap();
        assert_eq!(doc.roots().len(), 2);
    }

    // ==================== Value tests ====================

    #[test]
    fn test_array_value() {
        let doc = parse("xs = [1, \"two\", true]").unwrap();
        let node = doc.node(doc.roots()[0]);
        let items = node.value().and_then(Value::as_array).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].as_str(), Some("two"));
    }

    #[test]
    fn test_array_empty() {
        let doc = parse("xs = []").unwrap();
        let items = doc.node(doc.roots()[0]).value().and_then(Value::as_array);
        assert_eq!(items.map(<[Value]>::len), Some(0));
    }

    #[test]
    fn test_array_trailing_comma() {
        let doc = parse("xs = [1, 2,]").unwrap();
        let items = doc.node(doc.roots()[0]).value().and_then(Value::as_array);
        assert_eq!(items.map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_array_nested() {
        let doc = parse("xs = [[1], [2, 3]]").unwrap();
        let items = doc.node(doc.roots()[0]).value().and_then(Value::as_array).unwrap();
        assert_eq!(items[1].as_array().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_inline_object_value() {
        let doc = parse("tags = { Name = \"web\", Env = \"prod\" }").unwrap();
        let entries = doc.node(doc.roots()[0]).value().and_then(Value::as_object).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Name");
        assert_eq!(entries[1].1.as_str(), Some("prod"));
    }

    #[test]
    fn test_inline_object_without_commas() {
        let doc = parse("tags = { a = 1 b = 2 }").unwrap();
        let entries = doc.node(doc.roots()[0]).value().and_then(Value::as_object);
        assert_eq!(entries.map(<[(String, Value)]>::len), Some(2));
    }

    #[test]
    fn test_inline_object_empty() {
        let doc = parse("tags = {}").unwrap();
        let entries = doc.node(doc.roots()[0]).value().and_then(Value::as_object);
        assert_eq!(entries.map(<[(String, Value)]>::len), Some(0));
    }

    #[test]
    fn test_interpolation_survives_parse() {
        let doc = parse("ami = \"${var.ami_id}\"").unwrap();
        let node = doc.node(doc.roots()[0]);
        assert_eq!(node.value().and_then(Value::as_str), Some("${var.ami_id}"));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_error_missing_equals() {
        let err = parse_err("a 1");
        assert_eq!(err.kind, HclErrorKind::Syntax);
        assert!(err.message.contains("block label or '{'"));
    }

    #[test]
    fn test_error_unmatched_open_brace() {
        let err = parse_err("a { b = 1");
        assert_eq!(err.kind, HclErrorKind::Syntax);
        assert!(err.message.contains("unmatched '{'"));
    }

    #[test]
    fn test_error_stray_close_brace() {
        let err = parse_err("}");
        assert_eq!(err.kind, HclErrorKind::Syntax);
        assert!(err.message.contains("expected identifier"));
    }

    #[test]
    fn test_error_missing_value() {
        let err = parse_err("a =");
        assert_eq!(err.kind, HclErrorKind::Syntax);
        assert!(err.message.contains("a value"));
    }

    #[test]
    fn test_error_unmatched_bracket() {
        let err = parse_err("xs = [1, 2");
        assert!(err.message.contains("',' or ']'"));
    }

    #[test]
    fn test_error_bad_label_token() {
        let err = parse_err("a 1 { }");
        assert_eq!(err.kind, HclErrorKind::Syntax);
    }

    #[test]
    fn test_error_inline_object_missing_equals() {
        let err = parse_err("t = { a 1 }");
        assert!(err.message.contains("'='"));
    }

    #[test]
    fn test_error_position_reported() {
        let err = parse_err("a = 1\nb = ]");
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_error_lexical_propagates() {
        let err = parse_err("a = \"unterminated");
        assert_eq!(err.kind, HclErrorKind::Lexical);
    }

    #[test]
    fn test_no_partial_document_on_failure() {
        assert!(parse("a = 1\nb = @").is_err());
    }

    // ==================== Entry point tests ====================

    #[test]
    fn test_parse_empty_input() {
        let doc = parse("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_comments_only() {
        let doc = parse("# nothing\n/* here */\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_reader() {
        let input = b"a = 1" as &[u8];
        let doc = parse_reader(input).unwrap();
        assert_eq!(doc.roots().len(), 1);
    }

    #[test]
    fn test_parse_reader_invalid_utf8() {
        let input = b"\xff\xfe" as &[u8];
        let err = parse_reader(input).unwrap_err();
        assert_eq!(err.kind, HclErrorKind::Io);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/config.tf").unwrap_err();
        assert_eq!(err.kind, HclErrorKind::Io);
    }

    // ==================== Property tests ====================

    proptest! {
        #[test]
        fn prop_parser_never_panics(input in "\\PC*") {
            let _ = parse(&input);
        }

        #[test]
        fn prop_attribute_roundtrip_structure(
            name in "[a-z][a-z0-9_]{0,8}",
            text in "[a-zA-Z0-9 ]{0,12}",
        ) {
            let input = format!("{} = \"{}\"", name, text);
            let doc = parse(&input).unwrap();
            let node = doc.node(doc.roots()[0]);
            prop_assert_eq!(node.name(), name.as_str());
            prop_assert_eq!(node.value().and_then(Value::as_str), Some(text.as_str()));
        }
    }
}
