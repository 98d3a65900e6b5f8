//! Output records for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::types::Score;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// A scored correction candidate
pub struct Suggestion {
    /// the suggested word-form
    pub value: SmolStr,
    /// combined phonetic and fuzzy-similarity score of the word-form
    pub weight: Score,
}

impl Suggestion {
    /// creates a scored correction candidate
    pub fn new(value: SmolStr, weight: Score) -> Suggestion {
        Suggestion { value, weight }
    }

    /// gets the suggested word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the score of the suggestion
    pub fn weight(&self) -> Score {
        self.weight
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// A corrected token, casing reapplied
pub struct Correction {
    /// the token exactly as it appeared in the input
    pub original: SmolStr,
    /// the best-guess correction, in the casing style of the original
    pub corrected: SmolStr,
}

impl Correction {
    /// creates a correction record
    pub fn new(original: SmolStr, corrected: SmolStr) -> Correction {
        Correction {
            original,
            corrected,
        }
    }
}
