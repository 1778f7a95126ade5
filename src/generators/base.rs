//! Generator trait and the static descriptor shape used to register one.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GeneratorError, GeneratorResult};
use crate::tree::TreeContext;

/// Constructor for a generator instance.
///
/// Factories may fail, for example when a grammar cannot be loaded into a
/// parser. The registry reports such failures as
/// [`GeneratorError::Instantiation`] without trying any other descriptor.
pub type GeneratorFactory = fn() -> anyhow::Result<Box<dyn TreeGenerator>>;

/// A source-to-tree parser.
pub trait TreeGenerator {
    /// Parses source text into a tree.
    fn generate_from_source(&self, source: &str) -> GeneratorResult<TreeContext>;

    /// Reads a file and parses its contents. The default implementation
    /// funnels through [`TreeGenerator::generate_from_source`].
    fn generate_from_file(&self, path: &Path) -> GeneratorResult<TreeContext> {
        let source = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.generate_from_source(&source)
    }
}

/// Generators carry no introspectable identity, so the trait object formats
/// as an opaque marker. This keeps `Result<Box<dyn TreeGenerator>, _>`
/// usable with `unwrap`/`unwrap_err` and friends.
impl fmt::Debug for dyn TreeGenerator + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn TreeGenerator")
    }
}

/// Compile-time description of a generator: identity, file patterns, gate
/// and constructor. Installation compiles the patterns and turns this into
/// a live catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSpec {
    /// Symbolic name, unique within the known-generator table.
    pub id: &'static str,
    /// Regex accept rules matched against full path strings, unanchored.
    pub accept: &'static [&'static str],
    /// Experimental generators are hidden unless the registry opts in.
    pub experimental: bool,
    pub factory: GeneratorFactory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    struct FixedGenerator;

    impl TreeGenerator for FixedGenerator {
        fn generate_from_source(&self, _source: &str) -> GeneratorResult<TreeContext> {
            Ok(TreeContext::new(Tree::new("fixed")))
        }
    }

    #[test]
    fn test_generate_from_file_reads_then_delegates() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}").unwrap();

        let ctx = FixedGenerator.generate_from_file(file.path()).unwrap();
        assert_eq!(ctx.root.type_label, "fixed");
    }

    #[test]
    fn test_generate_from_file_reports_missing_file() {
        let err = FixedGenerator
            .generate_from_file(Path::new("does/not/exist.rs"))
            .unwrap_err();
        match err {
            GeneratorError::Io { path, .. } => assert_eq!(path, "does/not/exist.rs"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
