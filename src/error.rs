//! Error types for Canopy

use thiserror::Error;

pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Failures surfaced by the generator registry and by generators themselves.
///
/// Registration-time failures (`Pattern`) are fatal to that registration only.
/// Resolution-time failures (`Instantiation`, `NoGeneratorFound`) and
/// generation-time failures (`Io`, `Parse`) always propagate to the caller;
/// swallowing them would hand downstream consumers a silently missing tree.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An accept pattern handed to the registry is not a valid regular
    /// expression.
    #[error("invalid accept pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The matched descriptor's factory failed to construct a generator.
    /// First-match is final: the registry does not fall through to the next
    /// descriptor once a match has been made.
    #[error("cannot instantiate generator '{id}': {reason}")]
    Instantiation { id: String, reason: String },

    /// No installed descriptor accepted the path.
    #[error("no generator found for: '{path}'")]
    NoGeneratorFound { path: String },

    /// The generator could not read its input file. The underlying
    /// `std::io::Error` is preserved as the source and passed through the
    /// registry unchanged.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator read its input but could not produce a tree from it.
    #[error("failed to produce a tree: {detail}")]
    Parse { detail: String },
}

impl GeneratorError {
    /// True for failures that abort `resolve`/`generate_tree`, as opposed to
    /// registration-time failures.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::Instantiation { .. } | Self::NoGeneratorFound { .. }
        )
    }
}
