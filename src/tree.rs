//! Syntax tree representation produced by generators.
//!
//! Generators for different languages all emit the same shape: a typed,
//! positioned node hierarchy wrapped in a [`TreeContext`] that carries
//! generator-specific metadata alongside the root.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single node of a generated syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Node type, e.g. a grammar production name.
    pub type_label: String,
    /// Source text attached to the node, present on leaves that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Byte offset of the node's span in the source.
    pub pos: usize,
    /// Byte length of the node's span.
    pub length: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree>,
}

impl Tree {
    pub fn new(type_label: impl Into<String>) -> Self {
        Self {
            type_label: type_label.into(),
            label: None,
            pos: 0,
            length: 0,
            children: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_span(mut self, pos: usize, length: usize) -> Self {
        self.pos = pos;
        self.length = length;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Tree::size).sum::<usize>()
    }

    /// Depth-first pre-order visit. The callback receives each node along
    /// with its depth, root at depth 0.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&Tree, u32),
    {
        self.walk_at(visit, 0);
    }

    fn walk_at<F>(&self, visit: &mut F, depth: u32)
    where
        F: FnMut(&Tree, u32),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(visit, depth + 1);
        }
    }

    /// Collects references to all nodes of the given type, in pre-order.
    pub fn find_by_type(&self, type_label: &str) -> Vec<&Tree> {
        let mut found = Vec::new();
        self.collect_by_type(type_label, &mut found);
        found
    }

    fn collect_by_type<'a>(&'a self, type_label: &str, found: &mut Vec<&'a Tree>) {
        if self.type_label == type_label {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_type(type_label, found);
        }
    }
}

/// A generated tree plus metadata about how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeContext {
    pub root: Tree,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl TreeContext {
    pub fn new(root: Tree) -> Self {
        Self {
            root,
            metadata: HashMap::new(),
        }
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}
