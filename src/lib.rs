#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! Rule-driven transliteration between Latin phonetic notation and Bengali script.
//!
//! A [`RuleCorpus`] holds three character classes (vowels, consonants and
//! case-sensitive letters) and an ordered list of [`Pattern`]s. Each pattern
//! maps a fixed input sequence to a default output and may carry ordered
//! [`ConditionalRule`]s that pick a different output depending on the
//! neighbouring text.
//!
//! Two directions are implemented:
//!
//! * **avro**: Latin to Bengali. The input is case-folded (except for
//!   case-sensitive letters), then scanned left to right. At every position
//!   the longest matching pattern wins; its rules are evaluated against the
//!   surrounding text; unmatched characters are copied through.
//! * **orva**: Bengali to Latin, best effort. A reverse table is derived from
//!   the same corpus once per engine, the input is NFC-normalized and scanned
//!   the same way, and a clean-up pass removes joiners and signs that have no
//!   Latin counterpart.
//!
//! `banglish` and `lishbang` are recognized mode names without an
//! implementation; requesting them fails with
//! [`TransliterationError::UnimplementedMode`].
//!
//! # Example
//!
//! ```
//! use bangla_phonetic::{transliterate, Mode, TransliterateOptions};
//!
//! let bengali = transliterate("amar sOnar bangla", TransliterateOptions::default()).unwrap();
//! assert_eq!("\u{0986}\u{09AE}\u{09BE}\u{09B0} \u{09B8}\u{09CB}\u{09A8}\u{09BE}\u{09B0} \u{09AC}\u{09BE}\u{0982}\u{09B2}\u{09BE}", bengali);
//!
//! let latin = transliterate(&bengali, TransliterateOptions::new(Mode::Orva)).unwrap();
//! assert_eq!("amar sOnar bangla", latin);
//! ```
//!
//! # Memoization
//!
//! The forward scanner remembers, per thread, which pattern was selected for a
//! lookahead window as wide as the longest pattern. Only the selection is
//! remembered; rules always see the current text. See
//! [`EngineConfig::memo_capacity`].

pub(crate) mod error;

pub(crate) mod mode;

pub(crate) mod char_class;

pub(crate) mod rule_ty;

pub(crate) mod corpus;

pub(crate) mod matching;

pub(crate) mod pattern_memo;

pub(crate) mod avro;

pub(crate) mod orva;

pub(crate) mod words;

pub(crate) mod transliterator;

pub use char_class::{is_exact_at, CharClass, CharClasses};

pub use corpus::RuleCorpus;

pub use error::{CorpusError, Result, TransliterationError};

pub use mode::{Mode, TransliterateOptions};

pub use orva::{Exclusion, ReverseConfig, ReversePattern};

pub use rule_ty::{ConditionalRule, MatchCondition, Pattern, Scope, Side};

pub use transliterator::{EngineConfig, Transliterator};

pub use words::RomanizedWord;

/// Transliterates `text` with the bundled Avro corpus.
pub fn transliterate(text: &str, options: TransliterateOptions) -> Result<String> {
    Transliterator::global().transliterate(text, options)
}

/// Romanizes every Bengali word of `text` with the bundled Avro corpus.
pub fn romanize_words(text: &str) -> Vec<RomanizedWord> {
    Transliterator::global().romanize_words(text)
}
