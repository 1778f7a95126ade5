//! Catalog entry binding a generator id to its match rules and constructor.

use regex::Regex;

use crate::error::{GeneratorError, GeneratorResult};
use crate::generators::base::{GeneratorFactory, GeneratorSpec, TreeGenerator};

/// An installed generator: identity, compiled accept rules, constructor and
/// stability flag. Immutable once built. Descriptors never hold a generator
/// instance; `instantiate` constructs a fresh one per call.
#[derive(Debug, Clone)]
pub struct GeneratorDescriptor {
    id: String,
    accept: Vec<Regex>,
    factory: GeneratorFactory,
    experimental: bool,
}

impl GeneratorDescriptor {
    /// Compiles `spec`'s accept patterns. Fails with
    /// [`GeneratorError::Pattern`] on the first pattern that is not a valid
    /// regular expression.
    pub fn new(spec: &GeneratorSpec) -> GeneratorResult<Self> {
        let mut accept = Vec::with_capacity(spec.accept.len());
        for pattern in spec.accept {
            let rule = Regex::new(pattern).map_err(|source| GeneratorError::Pattern {
                pattern: (*pattern).to_string(),
                source,
            })?;
            accept.push(rule);
        }
        Ok(Self {
            id: spec.id.to_string(),
            accept,
            factory: spec.factory,
            experimental: spec.experimental,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_experimental(&self) -> bool {
        self.experimental
    }

    /// Whether this descriptor claims the given path.
    ///
    /// Experimental descriptors never claim anything while the gate is off.
    /// Rules use substring semantics: a rule matches when it finds a match
    /// anywhere within the path string.
    pub fn accepts_file(&self, path: &str, experimental_enabled: bool) -> bool {
        if self.experimental && !experimental_enabled {
            return false;
        }
        self.accept.iter().any(|rule| rule.is_match(path))
    }

    /// Constructs a fresh generator instance from the factory.
    pub(crate) fn instantiate(&self) -> GeneratorResult<Box<dyn TreeGenerator>> {
        (self.factory)().map_err(|e| GeneratorError::Instantiation {
            id: self.id.clone(),
            reason: format!("{:#}", e),
        })
    }
}
