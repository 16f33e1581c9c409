use serde::Deserialize;
use smallvec::SmallVec;

pub(crate) type CharBuf = SmallVec<[char; 8]>;

/// Which side of a matched span a condition inspects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The character(s) immediately before the match start.
    Prefix,
    /// The character(s) immediately after the match end.
    Suffix,
}

/// What a condition tests the neighbouring text for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// A vowel from the corpus vowel class.
    Vowel,
    /// A consonant from the corpus consonant class.
    Consonant,
    /// A string boundary, or a character that is neither vowel nor consonant.
    Punctuation,
    /// A fixed string adjacent to the match.
    Exact,
}

impl Scope {
    /// Parses a corpus scope such as `"vowel"` or `"!exact"`, returning the
    /// scope and whether it is negated.
    pub fn parse(s: &str) -> Option<(Scope, bool)> {
        let (negated, name) = match s.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let scope = match name {
            "vowel" => Scope::Vowel,
            "consonant" => Scope::Consonant,
            "punctuation" => Scope::Punctuation,
            "exact" => Scope::Exact,
            _ => return None,
        };
        Some((scope, negated))
    }
}

/// A single look-around check attached to a [`ConditionalRule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCondition {
    /// Side of the match window that is inspected.
    pub side: Side,
    /// What the neighbouring text is tested for.
    pub scope: Scope,
    /// Inverts the outcome of the test.
    pub negated: bool,
    value: String,
    pub(crate) value_chars: CharBuf,
}

impl MatchCondition {
    /// A condition on `side` testing `scope`.
    pub fn new(side: Side, scope: Scope) -> Self {
        MatchCondition {
            side,
            scope,
            negated: false,
            value: String::new(),
            value_chars: CharBuf::new(),
        }
    }

    /// A condition on the character before the match.
    pub fn prefix(scope: Scope) -> Self {
        Self::new(Side::Prefix, scope)
    }

    /// A condition on the character after the match.
    pub fn suffix(scope: Scope) -> Self {
        Self::new(Side::Suffix, scope)
    }

    /// An exact-text condition on `side` comparing against `value`.
    pub fn exact(side: Side, value: &str) -> Self {
        Self::new(side, Scope::Exact).with_value(value)
    }

    /// Sets the comparison text used by [`Scope::Exact`].
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self.value_chars = value.chars().collect();
        self
    }

    /// Negates this condition.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The comparison text of an exact condition (empty otherwise).
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A context-gated alternative replacement for a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalRule {
    /// Every condition must hold for the rule to fire.
    pub matches: Vec<MatchCondition>,
    /// Output emitted when the rule fires.
    pub replace: String,
}

impl ConditionalRule {
    /// A rule emitting `replace` once conditions are added with [`Self::when`].
    pub fn new(replace: &str) -> Self {
        ConditionalRule {
            matches: Vec::new(),
            replace: replace.to_owned(),
        }
    }

    /// Adds a condition.
    pub fn when(mut self, condition: MatchCondition) -> Self {
        self.matches.push(condition);
        self
    }
}

/// A mapping from a fixed input sequence to its default replacement, with
/// optional ordered context rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    find: String,
    /// Default output when no rule fires.
    pub replace: String,
    /// Context rules, evaluated in order; the first satisfied rule wins.
    pub rules: Vec<ConditionalRule>,
    pub(crate) find_chars: CharBuf,
}

impl Pattern {
    /// A pattern replacing `find` with `replace` unconditionally.
    pub fn new(find: &str, replace: &str) -> Self {
        Pattern {
            find: find.to_owned(),
            replace: replace.to_owned(),
            rules: Vec::new(),
            find_chars: find.chars().collect(),
        }
    }

    /// Appends a context rule.
    pub fn with_rule(mut self, rule: ConditionalRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The input sequence this pattern matches.
    pub fn find(&self) -> &str {
        &self.find
    }

    /// Length of `find` in characters.
    #[inline]
    pub fn find_len(&self) -> usize {
        self.find_chars.len()
    }

    /// Whether the pattern carries context rules.
    pub fn is_conditional(&self) -> bool {
        !self.rules.is_empty()
    }
}
