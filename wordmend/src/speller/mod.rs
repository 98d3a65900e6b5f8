//! Candidate selection over a word-list dictionary.

use natural::phonetics::soundex;
use serde::{Deserialize, Serialize};

use self::suggestion::{Correction, Suggestion};
use crate::case_handling::apply_casing;
use crate::constants::{MAX_SCORE, PHONETIC_MATCH_BONUS};
use crate::dictionary::Dictionary;
use crate::normalize::normalize;
use crate::types::Score;

pub mod suggestion;

/// Scoring parameters for candidate selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpellerConfig {
    /// Flat bonus awarded when a candidate's Soundex code equals the
    /// word's, added on top of the fuzzy ratio.
    pub phonetic_bonus: Score,
}

impl SpellerConfig {
    /// default scoring parameters
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            phonetic_bonus: PHONETIC_MATCH_BONUS,
        }
    }
}

/// Spell checker and corrector over a flat word-list dictionary.
///
/// Every lookup is a full scan: each dictionary entry is scored against
/// the input word and the best-scoring candidate wins. The dictionary is
/// read-only once built, so a speller is freely shareable by reference
/// across any number of sequential lookups.
#[derive(Debug, Clone)]
pub struct WordListSpeller {
    dictionary: Dictionary,
    config: SpellerConfig,
}

impl WordListSpeller {
    /// creates a speller with default scoring
    pub fn new(dictionary: Dictionary) -> WordListSpeller {
        WordListSpeller::with_config(dictionary, SpellerConfig::default())
    }

    /// creates a speller with the given scoring parameters
    pub fn with_config(dictionary: Dictionary, config: SpellerConfig) -> WordListSpeller {
        WordListSpeller { dictionary, config }
    }

    /// the reference dictionary backing this speller
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether `word` normalizes to a dictionary member.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(&normalize(word))
    }

    /// Finds the best-scoring candidate for an already-normalized `word`.
    ///
    /// An exact dictionary member wins outright at the maximum score,
    /// skipping the scan. Otherwise every entry is scored and the first
    /// maximal-score candidate in dictionary order is kept. Returns
    /// `None` only when the dictionary is empty.
    pub fn suggest(&self, word: &str) -> Option<Suggestion> {
        if self.dictionary.contains(word) {
            return Some(Suggestion::new(word.into(), MAX_SCORE));
        }

        let mut best: Option<Suggestion> = None;

        for candidate in self.dictionary.iter() {
            let weight = self.score(word, candidate);

            match best {
                Some(ref b) if weight <= b.weight => {}
                _ => best = Some(Suggestion::new(candidate.into(), weight)),
            }
        }

        best
    }

    /// Corrects one raw token: normalize, select the best candidate,
    /// reapply the original casing style.
    ///
    /// With an empty dictionary the normalized word itself is used, so
    /// the token passes through unchanged apart from normalization.
    pub fn correct(&self, raw: &str) -> Correction {
        let word = normalize(raw);
        let corrected = match self.suggest(&word) {
            Some(best) => apply_casing(raw, best.value()),
            None => apply_casing(raw, &word),
        };

        Correction::new(raw.into(), corrected)
    }

    // Soundex is undefined on empty input, so the phonetic comparison is
    // skipped when either side is empty and the fuzzy ratio alone decides.
    fn score(&self, word: &str, candidate: &str) -> Score {
        let mut score = 0;

        if !word.is_empty() && !candidate.is_empty() && soundex(word, candidate) {
            score += self.config.phonetic_bonus;
        }

        score + fuzzy_ratio(word, candidate)
    }
}

/// Normalized Damerau-Levenshtein similarity scaled to `[0, 100]`.
fn fuzzy_ratio(word: &str, candidate: &str) -> Score {
    (strsim::normalized_damerau_levenshtein(word, candidate) * 100.0).round() as Score
}
