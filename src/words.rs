use unicode_segmentation::UnicodeSegmentation;

/// A Bengali word together with its reverse transliteration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RomanizedWord {
    /// The word as it appears in the input.
    pub word: String,
    /// Its Latin phonetic form.
    pub romanized: String,
}

#[inline]
pub(crate) fn is_bengali(ch: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&ch)
}

/// Unicode words of `text` that contain at least one Bengali-block character.
pub(crate) fn bengali_words(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
        .filter(|word| word.chars().any(is_bengali))
}
