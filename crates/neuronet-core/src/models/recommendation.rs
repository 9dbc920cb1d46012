use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{
    DUPLICATE_THRESHOLD, MODERATE_SIMILARITY_THRESHOLD, REASONING_HIGH, REASONING_LOW,
    REASONING_MODERATE, REASONING_NEARLY_IDENTICAL, REVIEW_THRESHOLD,
};

/// Action a caller should take on a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Recommendation {
    Accept,
    Review,
    Reject,
}

impl Recommendation {
    /// Classify a similarity percentage: `>= 95` reject, `>= 85` review, else accept.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= DUPLICATE_THRESHOLD {
            Self::Reject
        } else if percentage >= REVIEW_THRESHOLD {
            Self::Review
        } else {
            Self::Accept
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Review => "review",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band that selects the reasoning text of an analysis.
///
/// Bands are 95 / 85 / 70. The 70 band has no recommendation counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReasoningBand {
    NearlyIdentical,
    High,
    Moderate,
    Low,
}

impl ReasoningBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= DUPLICATE_THRESHOLD {
            Self::NearlyIdentical
        } else if percentage >= REVIEW_THRESHOLD {
            Self::High
        } else if percentage >= MODERATE_SIMILARITY_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn reasoning(self) -> &'static str {
        match self {
            Self::NearlyIdentical => REASONING_NEARLY_IDENTICAL,
            Self::High => REASONING_HIGH,
            Self::Moderate => REASONING_MODERATE,
            Self::Low => REASONING_LOW,
        }
    }
}
