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

//! Output configuration for the HCL writer.

/// Indentation style for nested block bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum IndentStyle {
    /// One tab per nesting level.
    #[default]
    Tabs,
    /// The given number of spaces per nesting level.
    Spaces(usize),
}

impl IndentStyle {
    /// Writes `depth` levels of indentation into `out`.
    pub(crate) fn push_indent(&self, out: &mut String, depth: usize) {
        match self {
            Self::Tabs => {
                for _ in 0..depth {
                    out.push('\t');
                }
            }
            Self::Spaces(width) => {
                for _ in 0..depth * width {
                    out.push(' ');
                }
            }
        }
    }
}

/// Configuration for HCL text output.
///
/// # Examples
///
/// ```
/// use hclp_write::{IndentStyle, WriteConfig};
///
/// let config = WriteConfig::new().with_indent(IndentStyle::Spaces(2));
/// assert_eq!(config.indent, IndentStyle::Spaces(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct WriteConfig {
    /// Indentation style. Default: [`IndentStyle::Tabs`].
    pub indent: IndentStyle,
}

impl WriteConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation style.
    #[must_use]
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }
}
