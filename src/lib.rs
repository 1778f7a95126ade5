//! Canopy core: rule-based dispatch from file paths to tree generators.
//!
//! The center of the crate is [`GeneratorRegistry`], an ordered catalog of
//! generator descriptors. Each descriptor carries an identifier, regex accept
//! rules, an experimental flag and a constructor. Resolving a file path scans
//! the catalog in installation order and hands the file to the first
//! accepting descriptor's generator; built-in generators parse with
//! tree-sitter and emit the [`Tree`]/[`TreeContext`] model.
//!
//! The registry is constructed explicitly at startup, typically via
//! [`GeneratorRegistry::with_builtins`] with a [`RegistryConfig`] sourced
//! from the environment, then shared by reference.

pub mod config;
pub mod error;
pub mod generators;
pub mod grammars;
pub mod tree;

pub use config::{RegistryConfig, EXPERIMENTAL_ENV_VAR};
pub use error::{GeneratorError, GeneratorResult};
pub use generators::{
    find_known, known_generators, GeneratorDescriptor, GeneratorFactory, GeneratorRegistry,
    GeneratorSpec, TreeGenerator, TreeSitterGenerator,
};
pub use tree::{Tree, TreeContext};
