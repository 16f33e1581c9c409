//! Bengali to Latin reverse transliteration.
//!
//! The reverse table is derived from the forward corpus: every pattern with a
//! non-empty `find` and `replace` is swapped, sorted longest-first and
//! deduplicated on its new `find`. Scanning is a plain longest match with
//! raw-character passthrough, followed by a fixed clean-up pass. Only Bengali
//! runs of the input are normalized; other text is scanned as written.

use crate::{
    rule_ty::{CharBuf, Pattern},
    words::is_bengali,
};
use unicode_normalization::UnicodeNormalization;

const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';
const HASANTA: char = '\u{09CD}';
const NUKTA: char = '\u{09BC}';

/// A forward pattern excluded from reverse derivation because its reverse
/// would be ambiguous.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Exclusion {
    /// Forward `find` of the excluded pattern.
    pub find: String,
    /// Forward default `replace` of the excluded pattern.
    pub replace: String,
}

impl Exclusion {
    /// Excludes the forward pattern `find -> replace`.
    pub fn new(find: &str, replace: &str) -> Self {
        Exclusion {
            find: find.to_owned(),
            replace: replace.to_owned(),
        }
    }

    fn excludes(&self, pattern: &Pattern) -> bool {
        self.find == pattern.find() && self.replace == pattern.replace
    }
}

/// Settings for deriving the reverse table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseConfig {
    /// Forward patterns that never take part in reverse derivation.
    pub exclusions: Vec<Exclusion>,
}

impl Default for ReverseConfig {
    /// Excludes the bare vowel marker `o -> ""`.
    fn default() -> Self {
        ReverseConfig {
            exclusions: vec![Exclusion::new("o", "")],
        }
    }
}

/// One entry of the derived reverse table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversePattern {
    /// Bengali sequence to match (NFC).
    pub find: String,
    /// Latin output.
    pub replace: String,
    /// Derived from a pattern that carries context rules.
    pub conditional: bool,
    find_chars: CharBuf,
}

impl ReversePattern {
    fn from_forward(pattern: &Pattern) -> Self {
        let find: String = pattern.replace.nfc().collect();
        ReversePattern {
            find_chars: find.chars().collect(),
            find,
            replace: pattern.find().to_owned(),
            conditional: pattern.is_conditional(),
        }
    }

    /// Length of `find` in characters.
    pub fn find_len(&self) -> usize {
        self.find_chars.len()
    }
}

#[derive(Debug)]
pub(crate) struct OrvaEngine {
    patterns: Vec<ReversePattern>,
}

impl OrvaEngine {
    pub(crate) fn derive(patterns: &[Pattern], config: &ReverseConfig) -> Self {
        let mut reversed: Vec<ReversePattern> = patterns
            .iter()
            .filter(|p| !p.find().is_empty() && !p.replace.is_empty())
            .filter(|p| !config.exclusions.iter().any(|ex| ex.excludes(p)))
            .map(ReversePattern::from_forward)
            .collect();
        reversed.sort_by(|a, b| b.find_len().cmp(&a.find_len()));

        let mut seen = rustc_hash::FxHashSet::default();
        reversed.retain(|p| seen.insert(p.find.clone()) || p.conditional);

        log::debug!(
            "derived reverse table: {} entries from {} patterns",
            reversed.len(),
            patterns.len()
        );
        OrvaEngine { patterns: reversed }
    }

    pub(crate) fn patterns(&self) -> &[ReversePattern] {
        &self.patterns
    }

    fn scan(&self, text: &[char], pos: usize) -> Option<&ReversePattern> {
        let rest = &text[pos..];
        self.patterns
            .iter()
            .find(|pattern| rest.starts_with(&pattern.find_chars))
    }

    pub(crate) fn transliterate(&self, text: &str) -> String {
        let chars = normalize_bengali_runs(text);
        self.transliterate_chars(&chars, chars.len() * 2)
    }

    /// Scans `chars`, giving up after `limit` steps with the output so far.
    fn transliterate_chars(&self, chars: &[char], limit: usize) -> String {
        let mut output = String::with_capacity(chars.len());
        let mut pos = 0;
        let mut steps = 0;
        while pos < chars.len() {
            if steps >= limit {
                log::warn!(
                    "reverse scan stopped after {} steps at offset {} of {}",
                    steps,
                    pos,
                    chars.len()
                );
                break;
            }
            steps += 1;
            match self.scan(chars, pos) {
                Some(pattern) => {
                    output.push_str(&pattern.replace);
                    pos += pattern.find_len();
                }
                None => {
                    output.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        post_process(&output)
    }
}

#[inline]
fn is_reverse_input(ch: char) -> bool {
    is_bengali(ch) || ch == ZWNJ || ch == ZWJ
}

/// NFC-normalizes runs of Bengali text and copies everything else as is.
fn normalize_bengali_runs(text: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(is_reverse_input) {
        chars.extend(rest[..start].chars());
        let run = &rest[start..];
        let end = run.find(|ch| !is_reverse_input(ch)).unwrap_or(run.len());
        chars.extend(run[..end].nfc());
        rest = &run[end..];
    }
    chars.extend(rest.chars());
    chars
}

/// Drops joiner controls, romanizes independent vowels and strips hasanta and nukta.
fn post_process(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ZWNJ | ZWJ | HASANTA | NUKTA => {}
            'অ' | 'আ' => output.push('a'),
            'ও' => output.push('o'),
            'ই' => output.push('i'),
            'ঈ' | 'এ' => output.push('e'),
            'উ' => output.push('u'),
            _ => output.push(ch),
        }
    }
    output
}
