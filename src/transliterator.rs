use crate::{
    avro::AvroEngine,
    char_class::CharClasses,
    corpus::RuleCorpus,
    error::{Result, TransliterationError},
    mode::{Mode, TransliterateOptions},
    orva::{OrvaEngine, ReverseConfig, ReversePattern},
    rule_ty::Pattern,
    words::{bengali_words, RomanizedWord},
};
use std::sync::OnceLock;

/// Engine settings that are not part of the rule corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Entries kept in each thread's pattern memo before it is reset.
    /// Zero disables the memo.
    pub memo_capacity: usize,
    /// How the reverse table is derived.
    pub reverse: ReverseConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            memo_capacity: 4096,
            reverse: ReverseConfig::default(),
        }
    }
}

/// A rule corpus compiled into forward and reverse engines.
///
/// Construction does all the preparation work (sorting, reverse derivation);
/// afterwards the value is immutable and can be shared between threads.
///
/// ```
/// use bangla_phonetic::{Mode, RuleCorpus, Transliterator};
///
/// let engine = Transliterator::new(RuleCorpus::avro());
/// assert_eq!("\u{0986}\u{09AE}\u{09BF}", engine.avro("ami"));
/// assert_eq!("ami", engine.transliterate("\u{0986}\u{09AE}\u{09BF}", Mode::Orva.into()).unwrap());
/// ```
#[derive(Debug)]
pub struct Transliterator {
    classes: CharClasses,
    avro: AvroEngine,
    orva: OrvaEngine,
}

impl Transliterator {
    /// Compiles `corpus` with the default [`EngineConfig`].
    pub fn new(corpus: RuleCorpus) -> Self {
        Self::with_config(corpus, &EngineConfig::default())
    }

    /// Compiles `corpus` with explicit settings.
    pub fn with_config(corpus: RuleCorpus, config: &EngineConfig) -> Self {
        let (classes, patterns) = corpus.into_parts();
        let orva = OrvaEngine::derive(&patterns, &config.reverse);
        let avro = AvroEngine::new(patterns, config.memo_capacity);
        Transliterator {
            classes,
            avro,
            orva,
        }
    }

    /// The process-wide engine built from the bundled Avro corpus.
    pub fn global() -> &'static Transliterator {
        static GLOBAL: OnceLock<Transliterator> = OnceLock::new();
        GLOBAL.get_or_init(|| Transliterator::new(RuleCorpus::avro()))
    }

    /// Latin phonetic text to Bengali script.
    pub fn avro(&self, text: &str) -> String {
        self.avro.transliterate(&self.classes, text)
    }

    /// Bengali script to Latin phonetic text.
    pub fn orva(&self, text: &str) -> String {
        self.orva.transliterate(text)
    }

    /// Transliterates `text` in the mode chosen by `options`.
    pub fn transliterate(&self, text: &str, options: TransliterateOptions) -> Result<String> {
        match options.mode {
            Mode::Avro => Ok(self.avro(text)),
            Mode::Orva => Ok(self.orva(text)),
            mode @ (Mode::Banglish | Mode::Lishbang) => {
                Err(TransliterationError::UnimplementedMode(mode))
            }
        }
    }

    /// Romanizes every Bengali word of `text`.
    pub fn romanize_words(&self, text: &str) -> Vec<RomanizedWord> {
        bengali_words(text)
            .map(|word| RomanizedWord {
                word: word.to_owned(),
                romanized: self.orva(word),
            })
            .collect()
    }

    /// The character classes of the corpus.
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// Forward patterns in the order they are tried.
    pub fn patterns(&self) -> &[Pattern] {
        self.avro.patterns()
    }

    /// The derived reverse table in the order it is tried.
    pub fn reverse_patterns(&self) -> &[ReversePattern] {
        self.orva.patterns()
    }

    /// Whether `ch` is a vowel of this corpus.
    pub fn is_vowel(&self, ch: char) -> bool {
        self.classes.is_vowel(ch)
    }

    /// Whether `ch` is a consonant of this corpus.
    pub fn is_consonant(&self, ch: char) -> bool {
        self.classes.is_consonant(ch)
    }

    /// Whether `ch` is neither vowel nor consonant.
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.classes.is_punctuation(ch)
    }

    /// Whether the forward pre-pass keeps the case of `ch`.
    pub fn is_case_sensitive(&self, ch: char) -> bool {
        self.classes.is_case_sensitive(ch)
    }
}
