/*! Batch spelling correction against a reference word list.

Corrects misspelled tokens by scanning a flat dictionary of reference
words and scoring every candidate with a Soundex phonetic bonus plus a
fuzzy string-similarity ratio. The casing style of the original token
(all-caps, first-caps) is reapplied to the correction.

# Usage examples

```
use wordmend::dictionary::Dictionary;
use wordmend::speller::WordListSpeller;

let dictionary = Dictionary::from_words(["receive", "achieve"]);
let speller = WordListSpeller::new(dictionary);

let correction = speller.correct("RECIEVE");
assert_eq!(correction.corrected, "RECEIVE");
```

The command-line driver in [`wordmend-bin`] in the same repository reads
the reference list and the error tokens from files and writes the
corrected pairs as tab-separated rows.

[`wordmend-bin`]: (https://github.com/divvun/wordmend)

*/

#![warn(missing_docs)]
pub mod case_handling;
pub mod dictionary;
pub mod normalize;
pub mod speller;

pub(crate) mod constants;
pub(crate) mod types;
