//! Error types for the lunaria-annotate crate.

/// Error type for special-day rule sources.
///
/// Failures are isolated per rendered cell by the grid layer; they never
/// abort a whole grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// Returned when the rule source itself failed (I/O, parse, remote).
    #[error("rule source failure: {reason}")]
    Source {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a rule table contains an unparseable date key.
    #[error("unparseable date key in rule table: {key:?}")]
    BadDateKey {
        /// The offending key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = RuleError::BadDateKey {
            key: "13/01/2025".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unparseable date key in rule table: \"13/01/2025\""
        );
    }
}
