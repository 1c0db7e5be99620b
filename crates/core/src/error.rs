//! Error types for parameter loading and submodel evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the lava flow submodels.
///
/// Computations are deterministic closed-form arithmetic, so nothing here is
/// retryable: a configuration error aborts startup and a domain violation means
/// the caller handed in a non-physical state.
#[derive(Error, Debug)]
pub enum FlowError {
    /// A required parameter is missing, not numeric, or outside its physical range.
    #[error("configuration error at `{key}`: {reason}")]
    Configuration { key: String, reason: String },

    /// The parameter file could not be read.
    #[error("failed to read parameter file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input or a computed result is not physical (negative temperature,
    /// cover fraction outside [0, 1], NaN, ...).
    #[error("domain violation: {quantity} = {value} ({constraint})")]
    DomainViolation {
        quantity: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl FlowError {
    /// Create a configuration error for a dotted parameter key.
    ///
    /// # Arguments
    /// * `key` - Dotted path of the parameter (e.g. `"radiation_parameters.epsilon_hot"`)
    /// * `reason` - What is wrong with it
    pub fn configuration(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a domain violation for a named quantity.
    pub fn domain(quantity: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::DomainViolation {
            quantity,
            value,
            constraint,
        }
    }

    /// True for errors raised while loading parameters
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::Io { .. })
    }
}

/// Result alias used across the crate
pub type FlowResult<T> = Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_key() {
        let err = FlowError::configuration("eruption_condition.eruption_temperature", "missing");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "configuration error at `eruption_condition.eruption_temperature`: missing"
        );
    }

    #[test]
    fn test_domain_message() {
        let err = FlowError::domain("channel_width", -2.0, "must be > 0");
        assert!(!err.is_configuration());
        assert_eq!(
            err.to_string(),
            "domain violation: channel_width = -2 (must be > 0)"
        );
    }
}
