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

//! The parsed HCL syntax tree.
//!
//! A [`Document`] owns all nodes in a flat arena; nodes address each other
//! by [`NodeId`] index. Parent links are plain indices kept for diagnostics
//! and navigation, never for ownership, so the tree is cycle-free by
//! construction. A `Document` is immutable once the parser returns it.

use crate::lex::Span;
use crate::value::Value;

/// Index of a node in a [`Document`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// What a syntax-tree node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A block with its ordered, non-empty label path, e.g.
    /// `resource "aws_instance" "web"`.
    Block {
        /// The block's label path: one bare identifier followed by zero or
        /// more quoted labels. Never empty.
        labels: Vec<String>,
    },
    /// A single `name = value` assignment.
    Attribute {
        /// The attribute name.
        name: String,
        /// The attribute's literal value.
        value: Value,
    },
}

/// A node in the syntax tree: a block or an attribute, with its source span,
/// parent link, and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// The node kind (block or attribute).
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's source span.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The structural parent, if any. Diagnostic only.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered child node ids (empty for attributes).
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if this node is a block.
    pub fn is_block(&self) -> bool {
        matches!(self.kind, NodeKind::Block { .. })
    }

    /// Returns `true` if this node is an attribute.
    pub fn is_attribute(&self) -> bool {
        matches!(self.kind, NodeKind::Attribute { .. })
    }

    /// The attribute name, or the block's first label.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Attribute { name, .. } => name,
            NodeKind::Block { labels } => &labels[0],
        }
    }

    /// The block's label path, or `None` for attributes.
    pub fn labels(&self) -> Option<&[String]> {
        match &self.kind {
            NodeKind::Block { labels } => Some(labels),
            NodeKind::Attribute { .. } => None,
        }
    }

    /// The attribute's value, or `None` for blocks.
    pub fn value(&self) -> Option<&Value> {
        match &self.kind {
            NodeKind::Attribute { value, .. } => Some(value),
            NodeKind::Block { .. } => None,
        }
    }
}

/// A parsed HCL document: an arena of nodes plus the ordered top-level ids.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
}

impl Document {
    /// Looks up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this document.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The ordered top-level nodes.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the top-level nodes in declaration order.
    pub fn iter_roots(&self) -> impl Iterator<Item = &Node> {
        self.roots.iter().map(move |&id| self.node(id))
    }
}
