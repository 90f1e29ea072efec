use thiserror::Error;

/// Errors raised while building a swarm.
///
/// Only construction can fail. Once a [`SwarmOptimizer`](crate::algorithms::particles::SwarmOptimizer)
/// exists, stepping it never returns an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    /// A configuration value is outside of its allowed range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// A description of the violated constraint.
        reason: String,
    },
}

impl SwarmError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SwarmError::invalid("population_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `population_size`: must be at least 1"
        );
    }
}
