use crate::{
    char_class::CharClasses, matching::resolve_replacement, pattern_memo::THREAD_PATTERN_MEMO,
    rule_ty::Pattern,
};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ENGINE_ID: AtomicU64 = AtomicU64::new(0);

/// Latin to Bengali scanner: greedy longest match with context rules.
#[derive(Debug)]
pub(crate) struct AvroEngine {
    /// Sorted by descending `find` length; ties keep corpus order.
    patterns: Vec<Pattern>,
    /// Memo key width, equal to the longest `find`.
    window: usize,
    id: u64,
    memo_capacity: usize,
}

impl AvroEngine {
    pub(crate) fn new(mut patterns: Vec<Pattern>, memo_capacity: usize) -> Self {
        patterns.sort_by(|a, b| b.find_len().cmp(&a.find_len()));
        let window = patterns.first().map_or(0, Pattern::find_len);
        AvroEngine {
            patterns,
            window,
            id: NEXT_ENGINE_ID.fetch_add(1, Ordering::Relaxed),
            memo_capacity,
        }
    }

    pub(crate) fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    fn scan(&self, text: &[char], pos: usize) -> Option<usize> {
        let rest = &text[pos..];
        self.patterns
            .iter()
            .position(|pattern| rest.starts_with(&pattern.find_chars))
    }

    fn select(&self, text: &[char], pos: usize) -> Option<usize> {
        if self.memo_capacity == 0 {
            return self.scan(text, pos);
        }
        let window = &text[pos..text.len().min(pos + self.window)];
        THREAD_PATTERN_MEMO
            .try_with(|memo| {
                memo.get_or_insert_with(self.id, window, self.memo_capacity, || {
                    self.scan(text, pos)
                })
            })
            .unwrap_or_else(|_| self.scan(text, pos))
    }

    pub(crate) fn transliterate(&self, classes: &CharClasses, text: &str) -> String {
        let fixed = classes.fix_string(text);
        let mut output = String::with_capacity(text.len() * 3);
        let mut pos = 0;
        while pos < fixed.len() {
            match self.select(&fixed, pos) {
                Some(idx) => {
                    let pattern = &self.patterns[idx];
                    let end = pos + pattern.find_len();
                    output.push_str(resolve_replacement(pattern, classes, &fixed, pos, end));
                    pos = end;
                }
                None => {
                    output.push(fixed[pos]);
                    pos += 1;
                }
            }
        }
        output
    }
}
