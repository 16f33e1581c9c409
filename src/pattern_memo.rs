use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;

/// Lookahead window plus the identity of the engine that produced the entry.
type MemoKey = (u64, SmallVec<[char; 8]>);

/// Remembers which pattern (if any) was selected for a lookahead window.
///
/// Only pattern *selection* is stored: it is a pure function of the window as
/// long as the window is at least as wide as the longest pattern. Rule
/// outcomes depend on the surrounding text and are never cached.
pub(crate) struct PatternMemo {
    entries: RefCell<FxHashMap<MemoKey, Option<usize>>>,
}

impl Default for PatternMemo {
    fn default() -> Self {
        PatternMemo {
            entries: RefCell::new(FxHashMap::default()),
        }
    }
}

impl PatternMemo {
    /// Returns the memoized selection for `window`, computing and storing it
    /// with `select` on a miss. The map is emptied once it holds `capacity`
    /// entries.
    pub(crate) fn get_or_insert_with<F>(
        &self,
        engine: u64,
        window: &[char],
        capacity: usize,
        select: F,
    ) -> Option<usize>
    where
        F: FnOnce() -> Option<usize>,
    {
        let key: MemoKey = (engine, SmallVec::from_slice(window));
        let mut entries = match self.entries.try_borrow_mut() {
            Ok(entries) => entries,
            Err(_) => return select(),
        };
        if let Some(selected) = entries.get(&key) {
            return *selected;
        }
        let selected = select();
        if entries.len() >= capacity {
            log::trace!("pattern memo full ({} entries), resetting", entries.len());
            entries.clear();
        }
        entries.insert(key, selected);
        selected
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

thread_local! {
    pub(crate) static THREAD_PATTERN_MEMO: PatternMemo = PatternMemo::default();
}
