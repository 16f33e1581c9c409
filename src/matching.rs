//! Context evaluation for conditional rules.
//!
//! A match occupies `text[start..end]`. Prefix conditions look at
//! `text[start - 1]` (or the `value.len()` characters before `start`),
//! suffix conditions at `text[end]` (or the characters from `end` on).

use crate::{
    char_class::{is_exact_at, CharClasses},
    rule_ty::{MatchCondition, Pattern, Scope, Side},
};

/// The character adjacent to the match on `side`, if any.
#[inline]
fn neighbour(side: Side, text: &[char], start: usize, end: usize) -> Option<char> {
    match side {
        Side::Prefix => start.checked_sub(1).map(|idx| text[idx]),
        Side::Suffix => text.get(end).copied(),
    }
}

/// Evaluates one condition against the match `text[start..end]`.
pub(crate) fn condition_holds(
    condition: &MatchCondition,
    classes: &CharClasses,
    text: &[char],
    start: usize,
    end: usize,
) -> bool {
    let adjacent = neighbour(condition.side, text, start, end);
    match condition.scope {
        Scope::Punctuation => {
            // a string boundary counts as punctuation
            let hit = adjacent.map_or(true, |ch| classes.is_punctuation(ch));
            hit != condition.negated
        }
        Scope::Vowel => adjacent.map_or(false, |ch| classes.is_vowel(ch)) != condition.negated,
        Scope::Consonant => {
            adjacent.map_or(false, |ch| classes.is_consonant(ch)) != condition.negated
        }
        Scope::Exact => {
            let len = condition.value_chars.len() as isize;
            let (window_start, window_end) = match condition.side {
                Side::Prefix => (start as isize - len, start as isize),
                Side::Suffix => (end as isize, end as isize + len),
            };
            is_exact_at(
                &condition.value_chars,
                text,
                window_start,
                window_end,
                condition.negated,
            )
        }
    }
}

/// Picks the output for `pattern` matched at `text[start..end]`: the first
/// rule whose conditions all hold, else the pattern's default.
pub(crate) fn resolve_replacement<'p>(
    pattern: &'p Pattern,
    classes: &CharClasses,
    text: &[char],
    start: usize,
    end: usize,
) -> &'p str {
    pattern
        .rules
        .iter()
        .find(|rule| {
            rule.matches
                .iter()
                .all(|condition| condition_holds(condition, classes, text, start, end))
        })
        .map_or(pattern.replace.as_str(), |rule| rule.replace.as_str())
}

#[cfg(test)]
mod tests {
    use super::{condition_holds, resolve_replacement};
    use crate::{CharClasses, ConditionalRule, MatchCondition, Pattern, Scope, Side};

    fn classes() -> CharClasses {
        CharClasses {
            vowels: "aeiou".chars().collect(),
            consonants: "bcdfghjklmnpqrstvwxyz".chars().collect(),
            case_sensitive: Default::default(),
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_punctuation_at_boundaries() {
        let classes = classes();
        let text = chars("ka");
        let prefix = MatchCondition::prefix(Scope::Punctuation);
        let suffix = MatchCondition::suffix(Scope::Punctuation);
        assert!(condition_holds(&prefix, &classes, &text, 0, 1));
        assert!(!condition_holds(&prefix, &classes, &text, 1, 2));
        assert!(condition_holds(&suffix, &classes, &text, 1, 2));
        assert!(!condition_holds(&suffix, &classes, &text, 0, 1));
        assert!(!condition_holds(&prefix.negate(), &classes, &text, 0, 1));
    }

    #[test]
    fn test_class_scopes_fail_at_boundaries() {
        let classes = classes();
        let text = chars("ab");
        let vowel = MatchCondition::prefix(Scope::Vowel);
        let consonant = MatchCondition::suffix(Scope::Consonant);
        assert!(!condition_holds(&vowel, &classes, &text, 0, 1));
        assert!(condition_holds(&vowel, &classes, &text, 1, 2));
        assert!(!condition_holds(&consonant, &classes, &text, 1, 2));
        assert!(condition_holds(&consonant, &classes, &text, 0, 1));
        // negation also flips the boundary outcome
        assert!(condition_holds(&vowel.negate(), &classes, &text, 0, 1));
    }

    #[test]
    fn test_exact_windows() {
        let classes = classes();
        let text = chars("rrik");
        let before = MatchCondition::exact(Side::Prefix, "rr");
        let after = MatchCondition::exact(Side::Suffix, "k");
        assert!(condition_holds(&before, &classes, &text, 2, 3));
        assert!(!condition_holds(&before, &classes, &text, 1, 2));
        assert!(condition_holds(&after, &classes, &text, 2, 3));
        assert!(!condition_holds(&after, &classes, &text, 3, 4));
        assert!(condition_holds(&after.negate(), &classes, &text, 3, 4));
    }

    #[test]
    fn test_first_satisfied_rule_wins() {
        let classes = classes();
        let pattern = Pattern::new("a", "default")
            .with_rule(ConditionalRule::new("never").when(MatchCondition::prefix(Scope::Vowel)))
            .with_rule(ConditionalRule::new("first").when(MatchCondition::prefix(Scope::Consonant)))
            .with_rule(ConditionalRule::new("second").when(MatchCondition::suffix(Scope::Punctuation)));
        let text = chars("ka");
        assert_eq!("first", resolve_replacement(&pattern, &classes, &text, 1, 2));
        let text = chars("a");
        assert_eq!("second", resolve_replacement(&pattern, &classes, &text, 0, 1));
        let text = chars("ak");
        assert_eq!("default", resolve_replacement(&pattern, &classes, &text, 0, 1));
    }

    #[test]
    fn test_all_conditions_must_hold() {
        let classes = classes();
        let pattern = Pattern::new("a", "plain").with_rule(
            ConditionalRule::new("both")
                .when(MatchCondition::prefix(Scope::Consonant))
                .when(MatchCondition::suffix(Scope::Consonant)),
        );
        assert_eq!("both", resolve_replacement(&pattern, &classes, &chars("kak"), 1, 2));
        assert_eq!("plain", resolve_replacement(&pattern, &classes, &chars("ka"), 1, 2));
    }
}
