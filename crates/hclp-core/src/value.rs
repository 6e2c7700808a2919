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

//! Literal values attached to HCL attributes.
//!
//! Boolean and number literals keep their raw lexeme from the source text;
//! coercion to `bool`/`f64` is deferred until a projection actually consumes
//! the value, so a malformed literal only fails when used, not at parse time.

use crate::error::{HclError, HclResult};

/// A literal value in an HCL document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string literal (escape-processed, interpolation kept verbatim).
    String(String),
    /// A boolean literal, raw lexeme.
    Bool(String),
    /// A number literal, raw lexeme.
    Number(String),
    /// An ordered array of values.
    Array(Vec<Value>),
    /// An ordered inline map of key/value pairs.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// A short name for the value's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Try to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an array slice.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get the value as inline-map entries.
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Coerces a boolean literal's raw lexeme.
    ///
    /// Only the exact, case-sensitive lexemes `true` and `false` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns a `ValueCoercion` error if the value is not a boolean literal
    /// or its lexeme is neither `true` nor `false`.
    pub fn coerce_bool(&self) -> HclResult<bool> {
        match self {
            Self::Bool(raw) if raw == "true" => Ok(true),
            Self::Bool(raw) if raw == "false" => Ok(false),
            Self::Bool(raw) => Err(HclError::value_coercion(format!(
                "'{}' is not a boolean literal",
                raw
            ))),
            other => Err(HclError::value_coercion(format!(
                "expected a boolean, found a {}",
                other.kind_name()
            ))),
        }
    }

    /// Coerces a number literal's raw lexeme to a finite `f64`.
    ///
    /// # Errors
    ///
    /// Returns a `ValueCoercion` error if the value is not a number literal,
    /// the lexeme fails to parse, or the result is not finite.
    pub fn coerce_number(&self) -> HclResult<f64> {
        match self {
            Self::Number(raw) => {
                let n: f64 = raw.parse().map_err(|_| {
                    HclError::value_coercion(format!("'{}' is not a numeric literal", raw))
                })?;
                if !n.is_finite() {
                    return Err(HclError::value_coercion(format!(
                        "numeric literal '{}' is out of range",
                        raw
                    )));
                }
                Ok(n)
            }
            other => Err(HclError::value_coercion(format!(
                "expected a number, found a {}",
                other.kind_name()
            ))),
        }
    }
}
