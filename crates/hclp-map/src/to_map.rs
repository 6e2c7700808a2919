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

//! Projection of a parsed [`Document`] onto an ordered string-keyed map.
//!
//! Each block's label path is walked against the map, one label per level.
//! Blocks sharing a label-path prefix merge into the same subtree; a repeated
//! full path promotes the existing object to a list of objects in place, so
//! the key keeps its original position. `resource "a" "b" {}` therefore lands
//! at `map["resource"]["a"]["b"]`, and a second `resource "a" "b" {}` turns
//! that slot into a two-element list.
//!
//! Projection is where deferred literal coercion happens: raw `true`/number
//! lexemes become JSON booleans and numbers here, and a malformed lexeme
//! surfaces as a `ValueCoercion` error.

use hclp_core::{Document, HclError, HclResult, NodeId, NodeKind, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Projects a document onto an insertion-ordered map.
///
/// Top-level attributes become direct entries; blocks are merged by label
/// path as described in the module docs. Key order follows first appearance
/// in the source text.
///
/// # Examples
///
/// ```
/// use hclp_core::parse;
/// use hclp_map::to_map;
///
/// let doc = parse("a { b = 1 }\na { b = 2 }").unwrap();
/// let map = to_map(&doc).unwrap();
/// assert!(map["a"].is_array());
/// ```
///
/// # Errors
///
/// Returns a `StructuralMerge` error when a label path collides with an
/// incompatible existing entry, or a `ValueCoercion` error when a raw
/// boolean/number lexeme fails to coerce.
pub fn to_map(doc: &Document) -> HclResult<Map<String, JsonValue>> {
    let mut map = Map::new();
    for &id in doc.roots() {
        project_node(&mut map, doc, id)?;
    }
    Ok(map)
}

/// Like [`to_map`], wrapped in a [`serde_json::Value::Object`].
pub fn to_map_value(doc: &Document) -> HclResult<JsonValue> {
    Ok(JsonValue::Object(to_map(doc)?))
}

/// Projects a document and serializes the result as compact JSON.
pub fn to_json(doc: &Document) -> HclResult<String> {
    let value = to_map_value(doc)?;
    serde_json::to_string(&value)
        .map_err(|e| HclError::io(format!("JSON serialization failed: {}", e)))
}

/// Projects a document and serializes the result as pretty-printed JSON.
pub fn to_json_pretty(doc: &Document) -> HclResult<String> {
    let value = to_map_value(doc)?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| HclError::io(format!("JSON serialization failed: {}", e)))
}

fn project_node(map: &mut Map<String, JsonValue>, doc: &Document, id: NodeId) -> HclResult<()> {
    let node = doc.node(id);
    match node.kind() {
        NodeKind::Attribute { name, value } => {
            // A repeated name replaces the value but keeps the key's
            // original position in the map.
            map.insert(name.clone(), project_value(value)?);
            Ok(())
        }
        NodeKind::Block { labels } => {
            let last = labels.len() - 1;
            let mut cursor = &mut *map;
            for (i, label) in labels.iter().enumerate() {
                cursor = descend(cursor, label, i == last)?;
            }
            for &child in node.children() {
                project_node(cursor, doc, child)?;
            }
            Ok(())
        }
    }
}

/// One step of the label-path walk, planned against the current entry.
enum Step {
    /// No entry yet: insert a fresh object and enter it.
    Insert,
    /// Entry is an object and more labels follow: enter it.
    Enter,
    /// Entry is an object and this is the final label: promote the slot to
    /// a two-element list, in place, and enter the new tail object.
    Promote,
    /// Entry is already a list of objects and this is the final label:
    /// append a fresh object and enter it.
    Append,
}

fn plan(map: &Map<String, JsonValue>, label: &str, last: bool) -> HclResult<Step> {
    match map.get(label) {
        None => Ok(Step::Insert),
        Some(JsonValue::Object(_)) if last => Ok(Step::Promote),
        Some(JsonValue::Object(_)) => Ok(Step::Enter),
        Some(JsonValue::Array(items)) if last && items.iter().all(JsonValue::is_object) => {
            Ok(Step::Append)
        }
        Some(existing) => Err(HclError::structural_merge(format!(
            "block label '{}' collides with an existing {}",
            label,
            json_kind(existing)
        ))),
    }
}

/// Walks one label, mutating the map as planned, and returns the object the
/// walk continues in.
fn descend<'m>(
    map: &'m mut Map<String, JsonValue>,
    label: &str,
    last: bool,
) -> HclResult<&'m mut Map<String, JsonValue>> {
    match plan(map, label, last)? {
        Step::Insert => {
            map.insert(label.to_string(), JsonValue::Object(Map::new()));
        }
        Step::Enter => {}
        Step::Promote => {
            if let Some(slot) = map.get_mut(label) {
                // In-place swap keeps the key at its original position.
                let first = std::mem::replace(slot, JsonValue::Array(Vec::with_capacity(2)));
                if let JsonValue::Array(items) = slot {
                    items.push(first);
                    items.push(JsonValue::Object(Map::new()));
                }
            }
        }
        Step::Append => {
            if let Some(JsonValue::Array(items)) = map.get_mut(label) {
                items.push(JsonValue::Object(Map::new()));
            }
        }
    }
    match map.get_mut(label) {
        Some(JsonValue::Object(inner)) => Ok(inner),
        Some(JsonValue::Array(items)) => match items.last_mut() {
            Some(JsonValue::Object(inner)) => Ok(inner),
            _ => Err(HclError::structural_merge(format!(
                "block list under '{}' holds a non-object element",
                label
            ))),
        },
        _ => Err(HclError::structural_merge(format!(
            "block label '{}' collides with an existing value",
            label
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "object",
    }
}

/// Converts a literal value, coercing raw boolean and number lexemes.
fn project_value(value: &Value) -> HclResult<JsonValue> {
    match value {
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Bool(_) => Ok(JsonValue::Bool(value.coerce_bool()?)),
        Value::Number(raw) => {
            let n = value.coerce_number()?;
            Number::from_f64(n).map(JsonValue::Number).ok_or_else(|| {
                HclError::value_coercion(format!("numeric literal '{}' is out of range", raw))
            })
        }
        Value::Array(items) => {
            let projected: HclResult<Vec<_>> = items.iter().map(project_value).collect();
            Ok(JsonValue::Array(projected?))
        }
        Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(key.clone(), project_value(item)?);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hclp_core::{parse, HclErrorKind};
    use serde_json::json;

    fn project(input: &str) -> Map<String, JsonValue> {
        to_map(&parse(input).unwrap()).unwrap()
    }

    fn project_err(input: &str) -> HclError {
        to_map(&parse(input).unwrap()).expect_err("expected projection failure")
    }

    // ==================== Attribute projection tests ====================

    #[test]
    fn test_top_level_attribute() {
        let map = project("x = \"hi\"");
        assert_eq!(map["x"], json!("hi"));
    }

    #[test]
    fn test_empty_document_projects_to_empty_map() {
        assert!(project("").is_empty());
    }

    #[test]
    fn test_number_coerced_to_f64() {
        let map = project("n = 3.14");
        assert_eq!(map["n"], json!(3.14));
    }

    #[test]
    fn test_bool_coerced() {
        let map = project("a = true\nb = false");
        assert_eq!(map["a"], json!(true));
        assert_eq!(map["b"], json!(false));
    }

    #[test]
    fn test_duplicate_attribute_last_wins_keeps_position() {
        let map = project("a = 1\nb = 2\na = 3");
        assert_eq!(map["a"], json!(3.0));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_array_and_inline_object_values() {
        let map = project("xs = [1, \"two\", true]\ntags = { Name = \"web\" }");
        assert_eq!(map["xs"], json!([1.0, "two", true]));
        assert_eq!(map["tags"], json!({ "Name": "web" }));
    }

    #[test]
    fn test_interpolation_projects_as_plain_string() {
        let map = project("ami = \"${var.ami_id}\"");
        assert_eq!(map["ami"], json!("${var.ami_id}"));
    }

    // ==================== Block projection tests ====================

    #[test]
    fn test_single_block_nests_by_labels() {
        let map = project("resource \"aws_instance\" \"web\" { count = 2 }");
        assert_eq!(
            map["resource"],
            json!({ "aws_instance": { "web": { "count": 2.0 } } })
        );
    }

    #[test]
    fn test_repeated_path_promotes_to_list() {
        let map = project("a { b = 1 }\na { b = 2 }");
        assert_eq!(map["a"], json!([{ "b": 1.0 }, { "b": 2.0 }]));
    }

    #[test]
    fn test_third_occurrence_appends() {
        let map = project("a { b = 1 }\na { b = 2 }\na { b = 3 }");
        assert_eq!(map["a"], json!([{ "b": 1.0 }, { "b": 2.0 }, { "b": 3.0 }]));
    }

    #[test]
    fn test_promotion_keeps_key_position() {
        let map = project("a { x = 1 }\nz = 0\na { x = 2 }");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["a", "z"]);
    }

    #[test]
    fn test_prefix_sharing_merges_subtrees() {
        let map = project("a { b { c = 1 } }\na { b { d = 2 } }");
        // Last label "a" repeats, so the top level promotes to a list; the
        // prefix is the path up to it, which both blocks share only at root.
        assert_eq!(
            map["a"],
            json!([{ "b": { "c": 1.0 } }, { "b": { "d": 2.0 } }])
        );
    }

    #[test]
    fn test_multi_label_prefix_sharing() {
        let map = project(
            "resource \"aws\" \"one\" { x = 1 }\nresource \"aws\" \"two\" { y = 2 }",
        );
        assert_eq!(
            map["resource"],
            json!({ "aws": { "one": { "x": 1.0 }, "two": { "y": 2.0 } } })
        );
    }

    #[test]
    fn test_block_order_follows_first_appearance() {
        let map = project("b { } a { } c { }");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_nested_blocks_inside_body() {
        let map = project("outer { inner { leaf = true } }");
        assert_eq!(map["outer"], json!({ "inner": { "leaf": true } }));
    }

    #[test]
    fn test_repeated_nested_block_promotes_inside_parent() {
        let map = project("a { b { x = 1 } b { x = 2 } }");
        assert_eq!(map["a"], json!({ "b": [{ "x": 1.0 }, { "x": 2.0 }] }));
    }

    // ==================== Structural merge error tests ====================

    #[test]
    fn test_label_path_through_scalar_fails() {
        let err = project_err("a = 1\na { b = 2 }");
        assert_eq!(err.kind, HclErrorKind::StructuralMerge);
        assert!(err.message.contains("'a'"));
    }

    #[test]
    fn test_label_path_through_list_of_scalars_fails() {
        let err = project_err("a = [1, 2]\na { b = 3 }");
        assert_eq!(err.kind, HclErrorKind::StructuralMerge);
    }

    #[test]
    fn test_intermediate_label_into_promoted_list_fails() {
        // After promotion "a" is a list; a longer path cannot traverse it.
        let err = project_err("a { x = 1 }\na { x = 2 }\na b { y = 3 }");
        assert_eq!(err.kind, HclErrorKind::StructuralMerge);
    }

    // ==================== Coercion error tests ====================

    #[test]
    fn test_overflow_number_fails_at_projection() {
        let doc = parse("n = 1e999").unwrap();
        let err = to_map(&doc).unwrap_err();
        assert_eq!(err.kind, HclErrorKind::ValueCoercion);
    }

    // ==================== JSON serialization tests ====================

    #[test]
    fn test_to_json_compact() {
        let doc = parse("a = true").unwrap();
        assert_eq!(to_json(&doc).unwrap(), "{\"a\":true}");
    }

    #[test]
    fn test_to_json_pretty_is_multiline() {
        let doc = parse("a = true").unwrap();
        let pretty = to_json_pretty(&doc).unwrap();
        assert!(pretty.contains('\n'));
        assert!(pretty.contains("\"a\": true"));
    }

    #[test]
    fn test_to_map_value_wraps_object() {
        let doc = parse("x = \"y\"").unwrap();
        assert_eq!(to_map_value(&doc).unwrap(), json!({ "x": "y" }));
    }
}
