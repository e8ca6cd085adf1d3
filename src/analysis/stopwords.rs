//! Stopword sets for the lexical engine.
//!
//! The set is injected into [`LexicalAnalyzer`](super::LexicalAnalyzer), so
//! tests can use a tiny fixture and users can load their own list.
//!
//! ```
//! use chatstats::analysis::Stopwords;
//!
//! let words = Stopwords::from_words(["il", "la"]);
//! assert!(words.contains("il"));
//! assert!(!words.contains("ciao"));
//!
//! assert!(Stopwords::italian().contains("perché"));
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Built-in Italian list, including WhatsApp placeholder words
/// (`media`, `omessi`) and the `null` sentinel.
const ITALIAN: &[&str] = &[
    "a", "ad", "adesso", "ai", "al", "alla", "allo", "allora", "altro", "altri", "alcuni", "anche",
    "ancora", "avere", "ben", "bene", "che", "chi", "ci", "come", "con", "cui", "da", "del",
    "della", "dello", "dentro", "di", "dopo", "e", "ed", "ecco", "fare", "fine", "fra", "già",
    "gli", "ho", "il", "in", "indietro", "invece", "io", "la", "là", "le", "lei", "lo", "loro",
    "ma", "me", "meglio", "molto", "ne", "nei", "nella", "no", "noi", "non", "nostro", "nove",
    "nuovo", "o", "oltre", "per", "perche", "perché", "più", "prima", "quello", "questa",
    "questo", "qui", "sarà", "secondo", "se", "sei", "sembra", "sembrava", "senza", "si", "sia",
    "sono", "sta", "stanno", "stato", "stessa", "stesso", "su", "sua", "suo", "sul", "sulla",
    "ti", "tra", "tu", "tua", "tuo", "un", "una", "uno", "va", "vi", "voi", "volte", "è", "però",
    "mi", "media", "omessi", "c'è", "cosa", "contro", "era", "hai", "ora", "quando", "dove",
    "solo", "poi", "comunque", "null", "ha", "alcuna", "altre", "oggi", "domani", "quindi",
    "tipo", "così", "fatto", "te", "voce", "vostro", "questi", "li", "i", "hanno", "devo", "alle",
    "mia", "miei", "mie", "mio", "tuoi", "casa", "vado", "fa", "so", "sto", "sa", "fai", "dei",
    "delle", "dalla", "dai", "dalle", "tutti", "tutte", "tutto", "sì", "vuoi",
];

/// A set of words excluded from frequency analysis.
///
/// Lookups are exact: callers pass tokens that are already lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Italian list.
    pub fn italian() -> Self {
        Self::from_words(ITALIAN.iter().copied())
    }

    /// Builds a set from any list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads one word per line. Blank lines and lines starting with `#` are
    /// ignored; words are trimmed and lowercased.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }
        Ok(Self { words })
    }

    /// Reads a stopword file, see [`from_reader`](Self::from_reader).
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }

    /// Adds every word of `other` to this set.
    pub fn extend(&mut self, other: Stopwords) {
        self.words.extend(other.words);
    }

    /// Returns `true` if `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
