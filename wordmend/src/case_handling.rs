//! Detecting the casing style of an input token and reapplying it to a
//! corrected word-form.

use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && upper_case(word) == word
}

pub fn is_first_caps(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
        && upper_first(&lower_case(word)) == word
}

/// Casing style of an input token.
///
/// Exactly three classes, checked in order with the first match winning:
/// all-caps, first-caps, anything else untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    /// every cased character is uppercase, at least one of them
    AllCaps,
    /// first character uppercase, the rest lowercase
    FirstCaps,
    /// any other shape, passed through unchanged
    None,
}

impl CaseMutation {
    /// Detects the casing class of `word`.
    pub fn of(word: &str) -> CaseMutation {
        if is_all_caps(word) {
            CaseMutation::AllCaps
        } else if is_first_caps(word) {
            CaseMutation::FirstCaps
        } else {
            CaseMutation::None
        }
    }

    /// Applies this casing class to `word`.
    pub fn apply(self, word: &str) -> SmolStr {
        match self {
            CaseMutation::AllCaps => upper_case(word),
            CaseMutation::FirstCaps => upper_first(&lower_case(word)),
            CaseMutation::None => SmolStr::new(word),
        }
    }
}

/// Reapplies the casing style of `original` to `corrected`.
pub fn apply_casing(original: &str, corrected: &str) -> SmolStr {
    CaseMutation::of(original).apply(corrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps() {
        assert_eq!(is_all_caps("HELLO"), true);
        assert_eq!(is_all_caps("Hello"), false);
        assert_eq!(is_all_caps("hello"), false);
        assert_eq!(is_all_caps("H3LLO"), true);
        assert_eq!(is_all_caps("H"), true);
        assert_eq!(is_all_caps("123"), false);
        assert_eq!(is_all_caps(""), false);
    }

    #[test]
    fn first_caps() {
        assert_eq!(is_first_caps("Hello"), true);
        assert_eq!(is_first_caps("HELLO"), false);
        assert_eq!(is_first_caps("hello"), false);
        assert_eq!(is_first_caps("HEllo"), false);
        assert_eq!(is_first_caps("H3llo"), true);
        assert_eq!(is_first_caps("123"), false);
        assert_eq!(is_first_caps(""), false);
    }

    #[test]
    fn detection_order() {
        // A single uppercase letter is both all-caps and first-caps;
        // all-caps wins.
        assert_eq!(CaseMutation::of("H"), CaseMutation::AllCaps);
        assert_eq!(CaseMutation::of("McDonald"), CaseMutation::None);
        assert_eq!(CaseMutation::of(""), CaseMutation::None);
    }

    #[test]
    fn casing_round_trip() {
        assert_eq!(apply_casing("HELLO", "world"), "WORLD");
        assert_eq!(apply_casing("Hello", "world"), "World");
        assert_eq!(apply_casing("hello", "world"), "world");
        assert_eq!(apply_casing("McDonald", "mcdonald"), "mcdonald");
        assert_eq!(apply_casing("Hello", "wORLD"), "World");
    }
}
