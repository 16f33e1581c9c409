use crate::error::TransliterationError;
use std::{fmt, str::FromStr};

/// Transliteration direction and scheme.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Latin phonetic input to Bengali script.
    #[default]
    Avro,
    /// Bengali script to Latin phonetic output. Lossy, best effort.
    Orva,
    /// Informal texting-style romanization. Not implemented.
    Banglish,
    /// English-speaker oriented mapping. Not implemented.
    Lishbang,
}

impl Mode {
    /// All modes, in the order they are documented.
    pub const ALL: [Mode; 4] = [Mode::Avro, Mode::Orva, Mode::Banglish, Mode::Lishbang];

    /// The lowercase name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Avro => "avro",
            Mode::Orva => "orva",
            Mode::Banglish => "banglish",
            Mode::Lishbang => "lishbang",
        }
    }

    /// Whether this mode has a working implementation.
    pub fn is_implemented(self) -> bool {
        matches!(self, Mode::Avro | Mode::Orva)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TransliterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| TransliterationError::InvalidMode(s.to_owned()))
    }
}

/// Per-call options for [`crate::transliterate`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransliterateOptions {
    /// Which scheme to apply. Defaults to [`Mode::Avro`].
    pub mode: Mode,
}

impl TransliterateOptions {
    /// Options selecting `mode`.
    pub const fn new(mode: Mode) -> Self {
        TransliterateOptions { mode }
    }
}

impl From<Mode> for TransliterateOptions {
    fn from(mode: Mode) -> Self {
        TransliterateOptions { mode }
    }
}
