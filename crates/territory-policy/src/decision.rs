//! Access decision types
//!
//! A [`Decision`] is the binary outcome of evaluation. An [`Evaluation`]
//! additionally records which pattern, if any, produced it.

use serde::{Deserialize, Serialize};
use std::fmt;
use territory_types::LocationCode;

/// Outcome of evaluating a policy against a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Access is granted
    Granted,

    /// Access is denied
    Denied,
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => f.write_str("granted"),
            Self::Denied => f.write_str("denied"),
        }
    }
}

/// Where a decision came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MatchSource {
    /// An exclude pattern matched
    Exclude { index: usize, pattern: LocationCode },

    /// An include pattern matched
    Include { index: usize, pattern: LocationCode },

    /// Nothing matched; the default deny applied
    Default,
}

/// Decision together with the pattern that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub decision: Decision,
    pub source: MatchSource,
}

impl Evaluation {
    pub(crate) fn excluded(index: usize, pattern: &LocationCode) -> Self {
        Self {
            decision: Decision::Denied,
            source: MatchSource::Exclude {
                index,
                pattern: pattern.clone(),
            },
        }
    }

    pub(crate) fn included(index: usize, pattern: &LocationCode) -> Self {
        Self {
            decision: Decision::Granted,
            source: MatchSource::Include {
                index,
                pattern: pattern.clone(),
            },
        }
    }

    pub(crate) fn default_deny() -> Self {
        Self {
            decision: Decision::Denied,
            source: MatchSource::Default,
        }
    }

    /// The matched pattern, if a list entry decided
    pub fn pattern(&self) -> Option<&LocationCode> {
        match &self.source {
            MatchSource::Exclude { pattern, .. } | MatchSource::Include { pattern, .. } => {
                Some(pattern)
            }
            MatchSource::Default => None,
        }
    }
}
