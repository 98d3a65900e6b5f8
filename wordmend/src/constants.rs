use crate::types::Score;

/// Flat bonus awarded when a candidate shares the word's Soundex code.
pub const PHONETIC_MATCH_BONUS: Score = 30;

/// A fuzzy ratio of 100 means the strings are identical.
pub const MAX_FUZZY_RATIO: Score = 100;

/// Highest total a candidate can score.
pub const MAX_SCORE: Score = PHONETIC_MATCH_BONUS + MAX_FUZZY_RATIO;
