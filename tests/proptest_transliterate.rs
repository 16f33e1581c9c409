//! Property-based tests: both directions are total and deterministic, and the
//! pattern memo never changes output.

use bangla_phonetic::{EngineConfig, RuleCorpus, Transliterator};
use proptest::prelude::*;
use std::sync::OnceLock;

fn uncached() -> &'static Transliterator {
    static ENGINE: OnceLock<Transliterator> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let config = EngineConfig {
            memo_capacity: 0,
            ..EngineConfig::default()
        };
        Transliterator::with_config(RuleCorpus::avro(), &config)
    })
}

// Phonetic-looking Latin text built from the corpus alphabet
fn latin_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z`,.?0-9 ]{0,40}"
}

fn bengali_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('\u{0980}', '\u{09FF}'),
            Just('\u{200C}'),
            Just('\u{200D}'),
            Just(' '),
        ],
        0..30,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn prop_avro_is_deterministic(text in latin_strategy()) {
        let engine = Transliterator::global();
        let first = engine.avro(&text);
        prop_assert_eq!(&first, &engine.avro(&text));
        prop_assert_eq!(&first, &uncached().avro(&text));
    }

    #[test]
    fn prop_avro_accepts_any_text(text in any::<String>()) {
        let engine = Transliterator::global();
        prop_assert_eq!(engine.avro(&text), uncached().avro(&text));
    }

    #[test]
    fn prop_orva_is_deterministic(text in bengali_strategy()) {
        let engine = Transliterator::global();
        prop_assert_eq!(engine.orva(&text), engine.orva(&text));
    }

    #[test]
    fn prop_orva_output_has_no_joiners_or_signs(text in bengali_strategy()) {
        let output = Transliterator::global().orva(&text);
        for ch in ['\u{200C}', '\u{200D}', '\u{09CD}', '\u{09BC}'] {
            prop_assert!(!output.contains(ch), "{:?} in {:?}", ch, output);
        }
    }

    #[test]
    fn prop_orva_accepts_any_text(text in any::<String>()) {
        let output = Transliterator::global().orva(&text);
        let stripped = ['\u{200C}', '\u{200D}', '\u{09CD}', '\u{09BC}'];
        if text.chars().any(|ch| !stripped.contains(&ch)) {
            prop_assert!(!output.is_empty(), "{:?} romanized to nothing", text);
        }
    }

    #[test]
    fn prop_orva_copies_text_without_bengali(text in "[a-zA-Z0-9 \u{0300}-\u{036F}\u{F900}-\u{F9FF}\u{1100}-\u{11FF}]{0,30}") {
        prop_assert_eq!(&text, &Transliterator::global().orva(&text));
    }

    #[test]
    fn prop_orva_keeps_ascii_letters(text in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(&text, &Transliterator::global().orva(&text));
    }
}
