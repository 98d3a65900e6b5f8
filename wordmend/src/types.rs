/// Combined score of a correction candidate: flat phonetic bonus plus a
/// fuzzy-similarity ratio in `[0, 100]`.
pub type Score = u32;
