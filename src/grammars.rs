//! Grammar name to tree-sitter language mapping.

use anyhow::{anyhow, Result};
use tree_sitter::Language;

/// Grammar names accepted by [`language_for`].
pub fn supported_grammars() -> &'static [&'static str] {
    &[
        "rust",
        "python",
        "javascript",
        "typescript",
        "tsx",
        "go",
        "java",
        "json",
        "yaml",
        "kotlin",
    ]
}

/// Looks up the compiled-in tree-sitter language for a grammar name.
pub fn language_for(grammar: &str) -> Result<Language> {
    match grammar.to_lowercase().as_str() {
        "rust" => Ok(tree_sitter_rust::LANGUAGE.into()),
        "python" => Ok(tree_sitter_python::LANGUAGE.into()),
        "javascript" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        "json" => Ok(tree_sitter_json::LANGUAGE.into()),
        "yaml" => Ok(tree_sitter_yaml::LANGUAGE.into()),
        "kotlin" => Ok(tree_sitter_kotlin_ng::LANGUAGE.into()),
        _ => Err(anyhow!(
            "unsupported grammar: '{}'. Supported grammars: {}",
            grammar,
            supported_grammars().join(", ")
        )),
    }
}
