//! Registry configuration

/// Environment variable that opts in to experimental generators.
///
/// Truthy values are `1`, `true`, `yes` and `on` (case-insensitive,
/// surrounding whitespace ignored). Anything else, including an unset
/// variable, leaves experimental generators hidden.
pub const EXPERIMENTAL_ENV_VAR: &str = "CANOPY_EXPERIMENTAL_GENERATORS";

/// Settings applied to a [`crate::GeneratorRegistry`] at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When false, descriptors flagged experimental never match and are
    /// omitted from listings.
    pub experimental: bool,
}

impl RegistryConfig {
    /// Reads the experimental flag from [`EXPERIMENTAL_ENV_VAR`].
    pub fn from_env() -> Self {
        let experimental = std::env::var(EXPERIMENTAL_ENV_VAR)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);
        Self { experimental }
    }

    pub fn with_experimental(experimental: bool) -> Self {
        Self { experimental }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy(" yes "));
        assert!(is_truthy("On"));
    }

    #[test]
    fn test_falsy_values() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("enabled"));
        assert!(!is_truthy("2"));
    }

    #[test]
    fn test_default_hides_experimental() {
        assert!(!RegistryConfig::default().experimental);
        assert!(RegistryConfig::with_experimental(true).experimental);
    }
}
