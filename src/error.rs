use crate::mode::Mode;
use thiserror::Error;

/// Errors raised at the transliteration dispatch boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransliterationError {
    /// The mode string is not one of the recognized modes.
    #[error("Invalid mode '{0}'. Available modes are: 'avro', 'orva', 'banglish', 'lishbang'")]
    InvalidMode(String),

    /// The mode is recognized but has no implementation.
    #[error("Mode '{0}' is not implemented")]
    UnimplementedMode(Mode),
}

/// Errors raised while loading a rule corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The document is not valid JSON or does not have the corpus shape.
    #[error("malformed rule corpus: {0}")]
    Json(#[from] serde_json::Error),

    /// A pattern has an empty `find` string, which would never advance the scanner.
    #[error("pattern #{index} has an empty find string")]
    EmptyFind {
        /// Position of the pattern in the corpus.
        index: usize,
    },

    /// A match condition names a scope other than vowel, consonant, punctuation or exact.
    #[error("pattern '{find}' uses unknown scope '{scope}'")]
    UnknownScope {
        /// The `find` string of the offending pattern.
        find: String,
        /// The scope as written in the corpus.
        scope: String,
    },

    /// A character is listed both as a vowel and as a consonant.
    #[error("'{ch}' is both a vowel and a consonant")]
    OverlappingClasses {
        /// The first character found in both classes.
        ch: char,
    },

    /// A character class entry is not exactly one character.
    #[error("{class} entry '{entry}' is not a single character")]
    InvalidClassEntry {
        /// Which class the entry belongs to.
        class: &'static str,
        /// The entry as written in the corpus.
        entry: String,
    },
}

/// A `Result` defaulting to [`TransliterationError`].
pub type Result<T, E = TransliterationError> = std::result::Result<T, E>;
