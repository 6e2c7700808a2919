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

//! Serialization of a [`Document`] back to HCL text.
//!
//! The writer renders the tree, not the projected map, so repeated blocks
//! with identical label paths come back out as repeated literal blocks. The
//! output is syntactically valid and structurally equivalent to the source
//! tree; original comments, blank lines, and exact spacing are not
//! preserved.

use crate::config::WriteConfig;
use hclp_core::{Document, HclResult, NodeId, NodeKind, Value};

/// Serializes a document to HCL text with the default configuration.
///
/// # Examples
///
/// ```
/// use hclp_core::parse;
/// use hclp_write::to_hcl;
///
/// let doc = parse("x = \"hi\"").unwrap();
/// assert_eq!(to_hcl(&doc).unwrap(), "x = \"hi\"\n");
/// ```
///
/// # Errors
///
/// Returns a `ValueCoercion` error if a raw boolean or number lexeme in the
/// tree fails its deferred coercion.
pub fn to_hcl(doc: &Document) -> HclResult<String> {
    to_hcl_with_config(doc, &WriteConfig::default())
}

/// Serializes a document to HCL text with an explicit configuration.
pub fn to_hcl_with_config(doc: &Document, config: &WriteConfig) -> HclResult<String> {
    let mut writer = HclWriter::new(*config);
    writer.write_document(doc)?;
    Ok(writer.finish())
}

/// Streaming writer over a growing output buffer.
struct HclWriter {
    config: WriteConfig,
    out: String,
}

impl HclWriter {
    fn new(config: WriteConfig) -> Self {
        Self {
            config,
            out: String::with_capacity(4096),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write_document(&mut self, doc: &Document) -> HclResult<()> {
        for &id in doc.roots() {
            self.write_node(doc, id, 0)?;
        }
        Ok(())
    }

    fn write_node(&mut self, doc: &Document, id: NodeId, depth: usize) -> HclResult<()> {
        let node = doc.node(id);
        match node.kind() {
            NodeKind::Attribute { name, value } => {
                self.config.indent.push_indent(&mut self.out, depth);
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.write_value(value)?;
                self.out.push('\n');
            }
            NodeKind::Block { labels } => {
                self.config.indent.push_indent(&mut self.out, depth);
                // First label bare, the rest double-quoted. The first label
                // always lexed as a bare identifier, so it needs no quoting;
                // later labels may have come from string literals and get the
                // same escaping as string values.
                self.out.push_str(&labels[0]);
                for label in &labels[1..] {
                    self.out.push_str(" \"");
                    push_escaped(&mut self.out, label);
                    self.out.push('"');
                }
                self.out.push_str(" {\n");
                for &child in node.children() {
                    self.write_node(doc, child, depth + 1)?;
                }
                self.config.indent.push_indent(&mut self.out, depth);
                self.out.push_str("}\n\n");
            }
        }
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> HclResult<()> {
        match value {
            Value::String(s) => {
                self.out.push('"');
                push_escaped(&mut self.out, s);
                self.out.push('"');
            }
            Value::Bool(_) => {
                let b = value.coerce_bool()?;
                self.out.push_str(if b { "true" } else { "false" });
            }
            Value::Number(_) => {
                let n = value.coerce_number()?;
                self.out.push_str(&n.to_string());
            }
            Value::Array(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_value(item)?;
                }
                self.out.push(']');
            }
            Value::Object(entries) => {
                if entries.is_empty() {
                    self.out.push_str("{}");
                    return Ok(());
                }
                self.out.push_str("{ ");
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(key);
                    self.out.push_str(" = ");
                    self.write_value(item)?;
                }
                self.out.push_str(" }");
            }
        }
        Ok(())
    }
}

/// Appends `text` with string-literal escaping applied.
///
/// Interpolation sequences ride along verbatim; `${` needs no escape in a
/// double-quoted literal.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndentStyle;
    use hclp_core::parse;
    use proptest::prelude::*;

    fn roundtrip(input: &str) -> String {
        to_hcl(&parse(input).unwrap()).unwrap()
    }

    // ==================== Attribute rendering tests ====================

    #[test]
    fn test_string_attribute() {
        assert_eq!(roundtrip("x = \"hi\""), "x = \"hi\"\n");
    }

    #[test]
    fn test_number_attribute_canonical_form() {
        assert_eq!(roundtrip("n = 3.14"), "n = 3.14\n");
        // A whole float drops the fraction.
        assert_eq!(roundtrip("n = 2.0"), "n = 2\n");
    }

    #[test]
    fn test_bool_attribute() {
        assert_eq!(roundtrip("a = true\nb = false"), "a = true\nb = false\n");
    }

    #[test]
    fn test_array_attribute() {
        assert_eq!(roundtrip("xs = [1, \"two\", true]"), "xs = [1, \"two\", true]\n");
        assert_eq!(roundtrip("xs = []"), "xs = []\n");
    }

    #[test]
    fn test_inline_object_attribute() {
        assert_eq!(
            roundtrip("tags = { Name = \"web\", Env = \"prod\" }"),
            "tags = { Name = \"web\", Env = \"prod\" }\n"
        );
        assert_eq!(roundtrip("tags = {}"), "tags = {}\n");
    }

    #[test]
    fn test_string_escapes_rendered() {
        assert_eq!(roundtrip(r#"s = "a\"b\\c""#), "s = \"a\\\"b\\\\c\"\n");
        assert_eq!(roundtrip(r#"s = "line1\nline2""#), "s = \"line1\\nline2\"\n");
    }

    #[test]
    fn test_interpolation_rendered_verbatim() {
        assert_eq!(roundtrip(r#"ami = "${var.ami_id}""#), "ami = \"${var.ami_id}\"\n");
    }

    // ==================== Block rendering tests ====================

    #[test]
    fn test_block_labels_quoted_after_first() {
        let out = roundtrip("resource \"aws_instance\" \"web\" { count = 2 }");
        assert_eq!(
            out,
            "resource \"aws_instance\" \"web\" {\n\tcount = 2\n}\n\n"
        );
    }

    #[test]
    fn test_nested_block_indents_with_tabs() {
        let out = roundtrip("a { b { c = 1 } }");
        assert_eq!(out, "a {\n\tb {\n\t\tc = 1\n\t}\n\n}\n\n");
    }

    #[test]
    fn test_repeated_blocks_stay_repeated() {
        // The writer renders the tree, never the promoted-list projection.
        let out = roundtrip("a { b = 1 }\na { b = 2 }");
        assert_eq!(out, "a {\n\tb = 1\n}\n\na {\n\tb = 2\n}\n\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(roundtrip(""), "");
    }

    #[test]
    fn test_spaces_indent() {
        let doc = parse("a { b = 1 }").unwrap();
        let config = WriteConfig::new().with_indent(IndentStyle::Spaces(2));
        let out = to_hcl_with_config(&doc, &config).unwrap();
        assert_eq!(out, "a {\n  b = 1\n}\n\n");
    }

    // ==================== Round-trip tests ====================

    #[test]
    fn test_reparse_preserves_map() {
        let input = "server \"web\" {\n  port = 8080\n  tls = true\n}\nname = \"demo\"";
        let original = hclp_map::to_map(&parse(input).unwrap()).unwrap();
        let exported = roundtrip(input);
        let reparsed = hclp_map::to_map(&parse(&exported).unwrap()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_reparse_preserves_map_with_promotion() {
        let input = "a { b = 1 }\na { b = 2 }\na { b = 3 }";
        let original = hclp_map::to_map(&parse(input).unwrap()).unwrap();
        let exported = roundtrip(input);
        let reparsed = hclp_map::to_map(&parse(&exported).unwrap()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_block_label_with_quote_stays_valid() {
        let input = "resource \"a\\\"b\" { x = 1 }";
        let doc = parse(input).unwrap();
        let out = to_hcl(&doc).unwrap();
        assert_eq!(out, "resource \"a\\\"b\" {\n\tx = 1\n}\n\n");
        let original = hclp_map::to_map(&doc).unwrap();
        let reparsed = hclp_map::to_map(&parse(&out).unwrap()).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_block_label_with_backslash_stays_valid() {
        let input = "path \"c:\\\\temp\" { x = 1 }";
        let doc = parse(input).unwrap();
        let out = to_hcl(&doc).unwrap();
        assert_eq!(out, "path \"c:\\\\temp\" {\n\tx = 1\n}\n\n");
        let reparsed = parse(&out).unwrap();
        let block = reparsed.node(reparsed.roots()[0]);
        assert_eq!(
            block.labels(),
            Some(&["path".to_string(), "c:\\temp".to_string()][..])
        );
    }

    #[test]
    fn test_export_is_idempotent() {
        let input = "a \"x\" { b = [1, 2]\n c { d = \"e\" } }";
        let once = roundtrip(input);
        let twice = roundtrip(&once);
        assert_eq!(once, twice);
    }

    // ==================== Error tests ====================

    #[test]
    fn test_overflow_number_fails_at_export() {
        let doc = parse("n = 1e999").unwrap();
        assert!(to_hcl(&doc).is_err());
    }

    // ==================== Property tests ====================

    proptest! {
        #[test]
        fn prop_export_idempotent(
            name in "[a-z][a-z0-9_]{0,6}".prop_filter(
                "true/false lex as boolean literals",
                |s| s != "true" && s != "false",
            ),
            label in "[a-zA-Z0-9 .\\\\\"]{0,8}",
            key in "[a-z][a-z0-9_]{0,6}".prop_filter(
                "true/false lex as boolean literals",
                |s| s != "true" && s != "false",
            ),
            n in 0..1000u32,
        ) {
            let mut quoted = String::new();
            push_escaped(&mut quoted, &label);
            let input = format!("{} \"{}\" {{ {} = {} }}", name, quoted, key, n);
            let doc = parse(&input).unwrap();
            let once = to_hcl(&doc).unwrap();
            let twice = to_hcl(&parse(&once).unwrap()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_export_reparses_to_equal_map(
            key in "[a-z][a-z0-9_]{0,6}".prop_filter(
                "true/false lex as boolean literals",
                |s| s != "true" && s != "false",
            ),
            text in "[a-zA-Z0-9 .\\\\\"]{0,10}",
        ) {
            let mut quoted = String::new();
            push_escaped(&mut quoted, &text);
            let input = format!("{} = \"{}\"", key, quoted);
            let doc = parse(&input).unwrap();
            let original = hclp_map::to_map(&doc).unwrap();
            let exported = to_hcl(&doc).unwrap();
            let reparsed = hclp_map::to_map(&parse(&exported).unwrap()).unwrap();
            prop_assert_eq!(original, reparsed);
        }
    }
}
