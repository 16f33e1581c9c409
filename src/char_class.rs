use smallvec::SmallVec;

/// Lowercase a character when it folds to exactly one character.
#[inline]
fn fold(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => Some(folded),
        _ => None,
    }
}

/// A set of single characters, stored lowercase and compared case-insensitively.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CharClass(SmallVec<[char; 32]>);

impl CharClass {
    /// Creates an empty class.
    pub fn new() -> Self {
        CharClass(SmallVec::new())
    }

    /// Whether `ch` (after lowercasing) is a member.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        match fold(ch) {
            Some(folded) => self.0.binary_search(&folded).is_ok(),
            None => false,
        }
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the class has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for CharClass {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut chars = iter
            .into_iter()
            .map(|ch| fold(ch).unwrap_or(ch))
            .collect::<SmallVec<[char; 32]>>();
        chars.sort_unstable();
        chars.dedup();
        CharClass(chars)
    }
}

impl<'a> FromIterator<&'a str> for CharClass {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().flat_map(str::chars).collect()
    }
}

/// The three character classes that drive context evaluation.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CharClasses {
    /// Characters treated as vowels by `vowel` conditions.
    pub vowels: CharClass,
    /// Characters treated as consonants by `consonant` conditions.
    pub consonants: CharClass,
    /// Characters whose case is preserved by the forward pre-pass.
    pub case_sensitive: CharClass,
}

impl CharClasses {
    /// Whether `ch` is a vowel.
    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch)
    }

    /// Whether `ch` is a consonant.
    #[inline]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(ch)
    }

    /// Whether `ch` is neither a vowel nor a consonant.
    ///
    /// Digits, symbols, whitespace and every character foreign to the
    /// corpus count as punctuation.
    #[inline]
    pub fn is_punctuation(&self, ch: char) -> bool {
        !(self.is_vowel(ch) || self.is_consonant(ch))
    }

    /// Whether the case of `ch` carries meaning and must survive the pre-pass.
    #[inline]
    pub fn is_case_sensitive(&self, ch: char) -> bool {
        self.case_sensitive.contains(ch)
    }

    /// Lowercases every character that is not case-sensitive.
    pub fn fix_string(&self, input: &str) -> Vec<char> {
        let mut fixed = Vec::with_capacity(input.len());
        for ch in input.chars() {
            if self.is_case_sensitive(ch) {
                fixed.push(ch);
            } else {
                fixed.extend(ch.to_lowercase());
            }
        }
        fixed
    }
}

/// Tests whether `haystack[start..end]` equals `needle`, XORed with `negate`.
///
/// Out-of-bounds windows (including a negative `start`) never equal the
/// needle, so they yield `negate`.
pub fn is_exact_at(needle: &[char], haystack: &[char], start: isize, end: isize, negate: bool) -> bool {
    let found = match (usize::try_from(start), usize::try_from(end)) {
        (Ok(start), Ok(end)) if start <= end && end <= haystack.len() => {
            haystack[start..end] == *needle
        }
        _ => false,
    };
    found != negate
}

#[cfg(test)]
mod tests {
    use super::{is_exact_at, CharClass, CharClasses};

    fn classes() -> CharClasses {
        CharClasses {
            vowels: "aeiou".chars().collect(),
            consonants: "bcdfghjklmnpqrstvwxyz".chars().collect(),
            case_sensitive: "oiudgjnrstyz".chars().collect(),
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_membership_ignores_case() {
        let classes = classes();
        assert!(classes.is_vowel('a'));
        assert!(classes.is_vowel('O'));
        assert!(classes.is_consonant('K'));
        assert!(!classes.is_consonant('a'));
        assert!(!classes.is_vowel('আ'));
    }

    #[test]
    fn test_punctuation_is_everything_else() {
        let classes = classes();
        for ch in [' ', '1', '.', '\n', 'আ', '`'] {
            assert!(classes.is_punctuation(ch), "{:?}", ch);
        }
        assert!(!classes.is_punctuation('b'));
        assert!(!classes.is_punctuation('E'));
    }

    #[test]
    fn test_class_dedups_and_folds() {
        let class: CharClass = "aAbB a".chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(vec!['a', 'b'], class.iter().collect::<Vec<_>>());
        assert_eq!(2, class.len());
        assert!(CharClass::new().is_empty());
    }

    #[test]
    fn test_fix_string_keeps_case_sensitive_letters() {
        let classes = classes();
        let fixed: String = classes.fix_string("jIbon KAT Sh").into_iter().collect();
        assert_eq!("jIbon kaT Sh", fixed);
    }

    #[test]
    fn test_exact_in_bounds() {
        let hay = chars("kotha");
        assert!(is_exact_at(&chars("th"), &hay, 2, 4, false));
        assert!(!is_exact_at(&chars("th"), &hay, 1, 3, false));
        assert!(is_exact_at(&chars("th"), &hay, 1, 3, true));
    }

    #[test]
    fn test_exact_out_of_bounds() {
        let hay = chars("ka");
        assert!(!is_exact_at(&chars("x"), &hay, -1, 0, false));
        assert!(is_exact_at(&chars("x"), &hay, -1, 0, true));
        assert!(!is_exact_at(&chars("ab"), &hay, 1, 3, false));
        assert!(is_exact_at(&chars("a"), &hay, 1, 2, false));
    }
}
