use crate::{
    char_class::{CharClass, CharClasses},
    error::CorpusError,
    rule_ty::{ConditionalRule, MatchCondition, Pattern, Scope, Side},
};
use serde::Deserialize;
use std::io;

const AVRO_RULES: &str = include_str!("../assets/avro.json");

/// A complete rule table: character classes plus ordered patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleCorpus {
    classes: CharClasses,
    patterns: Vec<Pattern>,
}

impl RuleCorpus {
    /// Builds a corpus, rejecting patterns whose `find` is empty and classes
    /// that share a character.
    pub fn new(classes: CharClasses, patterns: Vec<Pattern>) -> Result<Self, CorpusError> {
        if let Some(ch) = classes.vowels.iter().find(|&ch| classes.is_consonant(ch)) {
            return Err(CorpusError::OverlappingClasses { ch });
        }
        if let Some(index) = patterns.iter().position(|p| p.find().is_empty()) {
            return Err(CorpusError::EmptyFind { index });
        }
        Ok(RuleCorpus { classes, patterns })
    }

    /// The bundled Avro phonetic corpus.
    pub fn avro() -> Self {
        Self::from_json_str(AVRO_RULES).expect("bundled avro corpus is well-formed")
    }

    /// Parses a corpus from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let raw: RawCorpus = serde_json::from_str(json)?;
        raw.into_corpus()
    }

    /// Parses a corpus from a JSON reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CorpusError> {
        let raw: RawCorpus = serde_json::from_reader(reader)?;
        raw.into_corpus()
    }

    /// The character classes.
    pub fn classes(&self) -> &CharClasses {
        &self.classes
    }

    /// The patterns, in corpus order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub(crate) fn into_parts(self) -> (CharClasses, Vec<Pattern>) {
        (self.classes, self.patterns)
    }
}

#[derive(Deserialize)]
struct RawCorpus {
    vowel: RawClass,
    consonant: RawClass,
    casesensitive: RawClass,
    patterns: Vec<RawPattern>,
}

/// Classes are written either as one string (`"aeiou"`) or as a list of
/// single-character strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClass {
    Text(String),
    List(Vec<String>),
}

#[derive(Deserialize)]
struct RawPattern {
    find: String,
    replace: String,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Deserialize)]
struct RawRule {
    matches: Vec<RawMatch>,
    replace: String,
}

#[derive(Deserialize)]
struct RawMatch {
    #[serde(rename = "type")]
    side: Side,
    scope: String,
    #[serde(default)]
    value: Option<String>,
}

impl RawClass {
    fn into_class(self, class: &'static str) -> Result<CharClass, CorpusError> {
        match self {
            RawClass::Text(text) => Ok(text.chars().filter(|ch| !ch.is_whitespace()).collect()),
            RawClass::List(entries) => {
                for entry in entries.iter() {
                    if entry.chars().count() != 1 {
                        return Err(CorpusError::InvalidClassEntry {
                            class,
                            entry: entry.clone(),
                        });
                    }
                }
                Ok(entries.iter().map(String::as_str).collect())
            }
        }
    }
}

impl RawCorpus {
    fn into_corpus(self) -> Result<RuleCorpus, CorpusError> {
        let classes = CharClasses {
            vowels: self.vowel.into_class("vowel")?,
            consonants: self.consonant.into_class("consonant")?,
            case_sensitive: self.casesensitive.into_class("casesensitive")?,
        };
        let patterns = self
            .patterns
            .into_iter()
            .map(RawPattern::into_pattern)
            .collect::<Result<Vec<_>, _>>()?;
        let corpus = RuleCorpus::new(classes, patterns)?;
        log::debug!(
            "loaded rule corpus: {} patterns, {} vowels, {} consonants",
            corpus.patterns.len(),
            corpus.classes.vowels.len(),
            corpus.classes.consonants.len()
        );
        Ok(corpus)
    }
}

impl RawPattern {
    fn into_pattern(self) -> Result<Pattern, CorpusError> {
        let mut pattern = Pattern::new(&self.find, &self.replace);
        for raw_rule in self.rules {
            let mut rule = ConditionalRule::new(&raw_rule.replace);
            for raw_match in raw_rule.matches {
                let (scope, negated) =
                    Scope::parse(&raw_match.scope).ok_or_else(|| CorpusError::UnknownScope {
                        find: self.find.clone(),
                        scope: raw_match.scope.clone(),
                    })?;
                let mut condition = MatchCondition::new(raw_match.side, scope)
                    .with_value(raw_match.value.as_deref().unwrap_or_default());
                condition.negated = negated;
                rule = rule.when(condition);
            }
            pattern = pattern.with_rule(rule);
        }
        Ok(pattern)
    }
}
