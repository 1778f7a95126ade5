//! Generic tree-sitter backed generator.
//!
//! One implementation covers every built-in grammar: the grammar name picks
//! the `tree_sitter::Language`, and the CST is folded into the crate's
//! [`Tree`] model over named nodes only. Leaves keep their source text so the
//! produced tree is self-describing without the original file.

use anyhow::Context;
use tree_sitter::{Node, Parser};

use crate::error::{GeneratorError, GeneratorResult};
use crate::generators::base::TreeGenerator;
use crate::grammars::language_for;
use crate::tree::{Tree, TreeContext};

pub struct TreeSitterGenerator {
    grammar: &'static str,
    language: tree_sitter::Language,
}

impl TreeSitterGenerator {
    /// Builds a generator for the named grammar, verifying up front that a
    /// parser accepts the language. Failures here surface at resolution time
    /// as instantiation errors.
    pub fn new(grammar: &'static str) -> anyhow::Result<Self> {
        let language = language_for(grammar)?;
        Parser::new()
            .set_language(&language)
            .with_context(|| format!("grammar '{grammar}' rejected by parser"))?;
        Ok(Self { grammar, language })
    }

    /// Factory helper for registration tables.
    pub fn boxed(grammar: &'static str) -> anyhow::Result<Box<dyn TreeGenerator>> {
        Ok(Box::new(Self::new(grammar)?))
    }

    pub fn grammar(&self) -> &'static str {
        self.grammar
    }
}

impl TreeGenerator for TreeSitterGenerator {
    fn generate_from_source(&self, source: &str) -> GeneratorResult<TreeContext> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| GeneratorError::Parse {
                detail: format!("cannot configure parser for grammar '{}': {e}", self.grammar),
            })?;
        let cst = parser.parse(source, None).ok_or_else(|| GeneratorError::Parse {
            detail: format!("tree-sitter produced no tree (grammar '{}')", self.grammar),
        })?;

        let root = convert(cst.root_node(), source);
        let mut ctx = TreeContext::new(root);
        ctx.set_metadata("grammar", self.grammar);
        Ok(ctx)
    }
}

/// Folds a CST node into the tree model. Only named nodes are kept;
/// punctuation and other anonymous nodes are grammar noise for tree
/// consumers.
fn convert(node: Node, source: &str) -> Tree {
    let start = node.start_byte();
    let length = node.end_byte().saturating_sub(start);
    let mut tree = Tree::new(node.kind()).with_span(start, length);

    let child_count = node.named_child_count();
    if child_count == 0 {
        let text = node_text(&node, source);
        if !text.is_empty() {
            tree = tree.with_label(text);
        }
    } else {
        tree.children.reserve(child_count);
        for i in 0..child_count {
            if let Some(child) = node.named_child(i) {
                tree.children.push(convert(child, source));
            }
        }
    }
    tree
}

fn node_text(node: &Node, source: &str) -> String {
    let bytes = source.as_bytes();
    let start = node.start_byte();
    let end = node.end_byte();
    if start >= end || end > bytes.len() {
        return String::new();
    }
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}
