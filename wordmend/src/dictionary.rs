//! Loading the reference dictionary from a flat word list.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use smol_str::SmolStr;
use thiserror::Error;

use crate::normalize::normalize;

/// Error raised when the reference word list cannot be read.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list could not be opened or read.
    #[error("failed to read word list `{0}`: {1}")]
    Io(String, #[source] io::Error),
}

/// A deduplicated set of normalized reference words.
///
/// Entries keep their first-seen order, so iteration (and therefore
/// tie-breaking during candidate selection) is reproducible across runs.
/// Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<SmolStr>,
    index: HashSet<SmolStr>,
}

impl Dictionary {
    /// Reads a word list from `path`, one candidate word per line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        File::open(path)
            .and_then(|file| Dictionary::from_reader(BufReader::new(file)))
            .map_err(|e| DictionaryError::Io(path.to_string_lossy().to_string(), e))
    }

    /// Builds a dictionary from any line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Dictionary> {
        let mut dictionary = Dictionary::default();

        for line in reader.lines() {
            dictionary.insert(&line?);
        }

        log::debug!("loaded {} dictionary entries", dictionary.len());
        Ok(dictionary)
    }

    /// Builds a dictionary from in-memory words.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();

        for word in words {
            dictionary.insert(word.as_ref());
        }

        dictionary
    }

    fn insert(&mut self, line: &str) {
        let word = normalize(line.trim_end());

        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Whether `word` is a dictionary member. Callers are expected to
    /// normalize first.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(SmolStr::as_str)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn deduplicates_normalized_entries() {
        let dict = Dictionary::from_words(["Receive", "receive", "RECEIVE", "achieve"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("receive"));
        assert!(dict.contains("achieve"));
        assert!(!dict.contains("Receive"));
    }

    #[test]
    fn keeps_first_seen_order() {
        let dict = Dictionary::from_words(["dog", "cat", "dog", "ant"]);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["dog", "cat", "ant"]);
    }

    #[test]
    fn normalizes_entries() {
        let dict = Dictionary::from_words(["  Cooool  "]);
        assert!(dict.contains("col"));
        assert!(!dict.contains("cooool"));
    }

    #[test]
    fn empty_lines_are_kept_as_entries() {
        let dict = Dictionary::from_reader("cat\n\ndog\n".as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains(""));
    }

    #[test]
    fn reads_word_list_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Receive").unwrap();
        writeln!(file, "achieve").unwrap();
        writeln!(file, "receive").unwrap();

        let dict = Dictionary::open(file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("achieve"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Dictionary::open("definitely/not/here.txt").unwrap_err();
        let DictionaryError::Io(path, _) = err;
        assert!(path.contains("here.txt"));
    }
}
