//! Error types for rule-set construction and position parsing.
//!
//! Only configuration problems abort a call. An unknown position is
//! reported through `ScoringError::UnknownPosition` when parsed directly,
//! but scoring and aggregation log it and score the player as zero.

use thiserror::Error;

/// Errors produced by the scoring engine.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{ScoringError, ScoringRuleSet};
///
/// let err = ScoringRuleSet::from_name("SUPERFLEX").unwrap_err();
/// assert!(matches!(err, ScoringError::InvalidConfiguration(_)));
/// println!("{}", err); // "Invalid scoring configuration: unknown scoring system 'SUPERFLEX'"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    /// A rule set could not be built from the given name or settings.
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfiguration(String),

    /// A position tag is not one of QB, RB, WR, TE, K or DEF.
    #[error("Unknown position: '{0}'")]
    UnknownPosition(String),
}

impl ScoringError {
    pub(crate) fn unknown_system(name: &str) -> Self {
        ScoringError::InvalidConfiguration(format!("unknown scoring system '{}'", name))
    }
}
