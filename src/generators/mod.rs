//! Generator registration and dispatch.

pub mod base;
pub mod builtin;
pub mod descriptor;
pub mod registry;
pub mod tree_sitter;

pub use base::{GeneratorFactory, GeneratorSpec, TreeGenerator};
pub use builtin::{find_known, known_generators};
pub use descriptor::GeneratorDescriptor;
pub use registry::GeneratorRegistry;
pub use tree_sitter::TreeSitterGenerator;
