//! Known-generator table backing symbolic installation.
//!
//! This static table is the single source of truth for which generators ship
//! with the crate: `install_by_name` resolves names against it and
//! `GeneratorRegistry::with_builtins` installs all of it in order.

use once_cell::sync::Lazy;

use crate::generators::base::{GeneratorSpec, TreeGenerator};
use crate::generators::tree_sitter::TreeSitterGenerator;

fn new_rust() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("rust")
}

fn new_python() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("python")
}

fn new_javascript() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("javascript")
}

fn new_typescript() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("typescript")
}

fn new_tsx() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("tsx")
}

fn new_go() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("go")
}

fn new_java() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("java")
}

fn new_json() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("json")
}

fn new_yaml() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("yaml")
}

fn new_kotlin() -> anyhow::Result<Box<dyn TreeGenerator>> {
    TreeSitterGenerator::boxed("kotlin")
}

static KNOWN_GENERATORS: Lazy<Vec<GeneratorSpec>> = Lazy::new(|| {
    vec![
        GeneratorSpec {
            id: "rust",
            accept: &[r"\.rs$"],
            experimental: false,
            factory: new_rust,
        },
        GeneratorSpec {
            id: "python",
            accept: &[r"\.py$", r"\.pyi$"],
            experimental: false,
            factory: new_python,
        },
        GeneratorSpec {
            id: "javascript",
            accept: &[r"\.js$", r"\.jsx$", r"\.mjs$"],
            experimental: false,
            factory: new_javascript,
        },
        GeneratorSpec {
            id: "typescript",
            accept: &[r"\.ts$"],
            experimental: false,
            factory: new_typescript,
        },
        GeneratorSpec {
            id: "tsx",
            accept: &[r"\.tsx$"],
            experimental: false,
            factory: new_tsx,
        },
        GeneratorSpec {
            id: "go",
            accept: &[r"\.go$"],
            experimental: false,
            factory: new_go,
        },
        GeneratorSpec {
            id: "java",
            accept: &[r"\.java$"],
            experimental: false,
            factory: new_java,
        },
        GeneratorSpec {
            id: "json",
            accept: &[r"\.json$"],
            experimental: false,
            factory: new_json,
        },
        GeneratorSpec {
            id: "yaml",
            accept: &[r"\.ya?ml$"],
            experimental: false,
            factory: new_yaml,
        },
        // Newer grammar crate, kept behind the experimental gate for now.
        GeneratorSpec {
            id: "kotlin",
            accept: &[r"\.kts?$"],
            experimental: true,
            factory: new_kotlin,
        },
    ]
});

/// All generators this crate knows how to construct, in installation order.
pub fn known_generators() -> &'static [GeneratorSpec] {
    &KNOWN_GENERATORS
}

/// Looks up a known generator by its symbolic name.
pub fn find_known(name: &str) -> Option<&'static GeneratorSpec> {
    KNOWN_GENERATORS.iter().find(|spec| spec.id == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::descriptor::GeneratorDescriptor;

    fn snippet_for(id: &str) -> &'static str {
        match id {
            "rust" => "fn main() {}",
            "python" => "x = 1\n",
            "javascript" => "let x = 1;",
            "typescript" => "let x: number = 1;",
            "tsx" => "const x = <div/>;",
            "go" => "package main",
            "java" => "class A {}",
            "json" => "{}",
            "yaml" => "a: 1\n",
            "kotlin" => "fun main() {}",
            other => panic!("no snippet for generator '{other}'"),
        }
    }

    #[test]
    fn test_every_known_generator_constructs_and_parses() {
        for spec in known_generators() {
            let generator = (spec.factory)()
                .unwrap_or_else(|e| panic!("factory for '{}' failed: {e:#}", spec.id));
            let ctx = generator
                .generate_from_source(snippet_for(spec.id))
                .unwrap_or_else(|e| panic!("generator '{}' failed to parse: {e}", spec.id));
            assert!(ctx.root.size() >= 1, "generator '{}' produced no nodes", spec.id);
        }
    }

    #[test]
    fn test_every_accept_pattern_compiles() {
        for spec in known_generators() {
            assert!(
                GeneratorDescriptor::new(spec).is_ok(),
                "patterns for '{}' failed to compile",
                spec.id
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in known_generators() {
            assert!(seen.insert(spec.id), "duplicate generator id '{}'", spec.id);
        }
    }

    #[test]
    fn test_find_known() {
        assert_eq!(find_known("rust").map(|s| s.id), Some("rust"));
        assert_eq!(find_known("kotlin").map(|s| s.id), Some("kotlin"));
        assert!(find_known("cobol").is_none());
        assert!(find_known("").is_none());
    }

    #[test]
    fn test_only_kotlin_is_experimental() {
        let experimental: Vec<&str> = known_generators()
            .iter()
            .filter(|s| s.experimental)
            .map(|s| s.id)
            .collect();
        assert_eq!(experimental, vec!["kotlin"]);
    }

    #[test]
    fn test_yaml_pattern_covers_both_extensions() {
        let spec = find_known("yaml").unwrap();
        let desc = GeneratorDescriptor::new(spec).unwrap();
        assert!(desc.accepts_file("ci.yml", false));
        assert!(desc.accepts_file("ci.yaml", false));
        assert!(!desc.accepts_file("ci.yamlx", false));
    }

    #[test]
    fn test_typescript_does_not_claim_tsx() {
        let spec = find_known("typescript").unwrap();
        let desc = GeneratorDescriptor::new(spec).unwrap();
        assert!(desc.accepts_file("app.ts", false));
        assert!(!desc.accepts_file("app.tsx", false));
    }
}
