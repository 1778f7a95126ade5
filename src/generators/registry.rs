//! Ordered generator catalog with rule-based dispatch.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::generators::base::{GeneratorSpec, TreeGenerator};
use crate::generators::builtin::{find_known, known_generators};
use crate::generators::descriptor::GeneratorDescriptor;
use crate::tree::TreeContext;

/// Catalog of generator descriptors, scanned in installation order.
///
/// When several descriptors accept a path, the one installed first wins,
/// silently. Installation takes `&mut self` and resolution takes `&self`, so
/// all installation happens-before any resolution, across threads included.
/// The experimental gate is fixed at construction for the registry's
/// lifetime.
pub struct GeneratorRegistry {
    catalog: Vec<GeneratorDescriptor>,
    experimental: bool,
}

impl GeneratorRegistry {
    /// Empty registry with the gate taken from `config`.
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            catalog: Vec::new(),
            experimental: config.experimental,
        }
    }

    /// Registry pre-loaded with every known generator, in table order.
    pub fn with_builtins(config: &RegistryConfig) -> GeneratorResult<Self> {
        let mut registry = Self::new(config);
        for spec in known_generators() {
            registry.install(spec)?;
        }
        Ok(registry)
    }

    /// Appends a descriptor built from `spec` to the catalog.
    ///
    /// Fails only when one of `spec`'s accept patterns does not compile;
    /// the catalog is left unchanged in that case.
    pub fn install(&mut self, spec: &GeneratorSpec) -> GeneratorResult<()> {
        let descriptor = GeneratorDescriptor::new(spec)?;
        debug!(
            "Installed generator '{}' ({} accept rules)",
            descriptor.id(),
            spec.accept.len()
        );
        self.catalog.push(descriptor);
        Ok(())
    }

    /// Installs a generator by its symbolic name from the known-generator
    /// table. Unknown names are not an error: a diagnostic is logged and the
    /// catalog stays unchanged.
    pub fn install_by_name(&mut self, name: &str) {
        match find_known(name) {
            Some(spec) => {
                if let Err(e) = self.install(spec) {
                    warn!("Cannot load generator '{}': {}", name, e);
                }
            }
            None => warn!("Cannot load generator: {}", name),
        }
    }

    /// First descriptor in installation order that accepts `path` under the
    /// current gate.
    pub fn resolve_descriptor(&self, path: &str) -> GeneratorResult<&GeneratorDescriptor> {
        self.catalog
            .iter()
            .find(|d| d.accepts_file(path, self.experimental))
            .ok_or_else(|| GeneratorError::NoGeneratorFound {
                path: path.to_string(),
            })
    }

    /// Resolves `path` to a freshly constructed generator.
    ///
    /// First-match is final: if the matched descriptor's factory fails, the
    /// error is returned as-is and no later descriptor is consulted.
    pub fn resolve(&self, path: &str) -> GeneratorResult<Box<dyn TreeGenerator>> {
        self.resolve_descriptor(path)?.instantiate()
    }

    /// Resolves `path` and runs the generator against the file.
    pub fn generate_tree(&self, path: &str) -> GeneratorResult<TreeContext> {
        let descriptor = self.resolve_descriptor(path)?;
        let generator = descriptor.instantiate()?;
        let ctx = generator.generate_from_file(Path::new(path))?;
        debug!("Generated tree for {} with '{}'", path, descriptor.id());
        Ok(ctx)
    }

    /// Generates one tree per path in parallel. Results come back in input
    /// order; a failing path occupies its own slot without aborting the rest
    /// of the batch.
    pub fn generate_trees<P>(&self, paths: &[P]) -> Vec<GeneratorResult<TreeContext>>
    where
        P: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        paths
            .par_iter()
            .map(|path| self.generate_tree(path.as_ref()))
            .collect()
    }

    /// Identifiers of the descriptors visible under the current gate, in
    /// catalog order. Diagnostics only; dispatch goes through
    /// [`GeneratorRegistry::resolve`].
    pub fn list_available(&self) -> Vec<&str> {
        self.catalog
            .iter()
            .filter(|d| self.experimental || !d.is_experimental())
            .map(|d| d.id())
            .collect()
    }

    pub fn experimental_enabled(&self) -> bool {
        self.experimental
    }
}
