// Lexicon: top-level integration point for dictionary lookup.
//
// Owns the word store, the common-word set, and the result cache, and
// enforces the invalidation contract: every store mutation unconditionally
// clears the cache. Ranking itself is delegated to the pure pipelines in
// `ranking`.

use tracing::{debug, info};

use hanlex_core::{Direction, Entry};

use crate::cache::ResultCache;
use crate::ranking;
use crate::store::{CommonWordSet, StoreError, WordStore};

/// Top-level handle owning all lookup components.
///
/// Callers must not mutate the collection concurrently with an in-flight
/// ranking call; mutation requires `&mut self`, so the borrow checker
/// enforces that snapshot semantics hold.
#[derive(Default)]
pub struct Lexicon {
    store: WordStore,
    common: CommonWordSet,
    cache: ResultCache,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexicon over `entries`, validated on ingestion.
    pub fn with_entries(entries: Vec<Entry>) -> Result<Self, StoreError> {
        let mut store = WordStore::new();
        store.add_all(entries)?;
        Ok(Self {
            store,
            common: CommonWordSet::new(),
            cache: ResultCache::new(),
        })
    }

    /// Install the common-word reference set. Counts as a mutation: cached
    /// results computed under the old weighting are dropped.
    pub fn set_common_words(&mut self, common: CommonWordSet) {
        info!(words = common.len(), "common word set installed");
        self.common = common;
        self.cache.clear();
    }

    /// Ranked approximate matches for `query`, best first, at most
    /// `ranking::MAX_RESULTS` entries.
    pub fn find_similar(&self, query: &str, direction: Direction) -> Vec<Entry> {
        ranking::find_similar_words(&self.store, &self.common, &self.cache, query, direction)
    }

    /// The single best entry for `query`, via exact/variant-exact matching.
    pub fn search(&self, query: &str, direction: Direction) -> Option<Entry> {
        ranking::search(&self.store, &self.cache, query, direction)
    }

    pub fn add(&mut self, entry: Entry) -> Result<(), StoreError> {
        self.store.add(entry)?;
        self.invalidate("add");
        Ok(())
    }

    pub fn add_all(&mut self, entries: Vec<Entry>) -> Result<(), StoreError> {
        self.store.add_all(entries)?;
        self.invalidate("add_all");
        Ok(())
    }

    /// Remove an entry by normalized identity. No-op (and no cache clear)
    /// if absent.
    pub fn remove(&mut self, entry: &Entry) -> bool {
        let removed = self.store.remove(entry);
        if removed {
            self.invalidate("remove");
        }
        removed
    }

    pub fn modify(&mut self, old: &Entry, new: Entry) -> Result<bool, StoreError> {
        let modified = self.store.modify(old, new)?;
        if modified {
            self.invalidate("modify");
        }
        Ok(modified)
    }

    /// Replace the whole collection.
    pub fn reload(&mut self, entries: Vec<Entry>) -> Result<(), StoreError> {
        self.store.reload(entries)?;
        info!(entries = self.store.len(), "word collection reloaded");
        self.invalidate("reload");
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn invalidate(&self, mutation: &str) {
        debug!(mutation, "store mutated, clearing cache");
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::with_entries(vec![
            Entry::new("cat", "猫"),
            Entry::new("dog", "狗"),
            Entry::new("receive", "收到; 接收"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_malformed_entries_at_construction() {
        assert!(Lexicon::with_entries(vec![Entry::new("", "猫")]).is_err());
    }

    #[test]
    fn lookup_both_directions() {
        let lexicon = sample();
        let hits = lexicon.find_similar("cat", Direction::HeadwordToTranslation);
        assert_eq!(hits[0].translation(), "猫");

        let hits = lexicon.find_similar("猫", Direction::TranslationToHeadword);
        assert_eq!(hits[0].headword(), "cat");
    }

    #[test]
    fn mutation_invalidates_cached_results() {
        let mut lexicon = sample();
        let before = lexicon.find_similar("cta", Direction::HeadwordToTranslation);
        assert_eq!(before[0].headword(), "cat");

        // a closer entry appears; the cached ranking must not survive
        lexicon.add(Entry::new("cta", "查塔")).unwrap();
        let after = lexicon.find_similar("cta", Direction::HeadwordToTranslation);
        assert_eq!(after[0].headword(), "cta");
    }

    #[test]
    fn removing_missing_entry_is_a_noop() {
        let mut lexicon = sample();
        assert!(!lexicon.remove(&Entry::new("bird", "鸟")));
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn reload_replaces_and_invalidates() {
        let mut lexicon = sample();
        assert!(
            lexicon
                .search("cat", Direction::HeadwordToTranslation)
                .is_some()
        );

        lexicon.reload(vec![Entry::new("bird", "鸟")]).unwrap();
        assert!(
            lexicon
                .search("cat", Direction::HeadwordToTranslation)
                .is_none()
        );
        assert!(
            lexicon
                .search("bird", Direction::HeadwordToTranslation)
                .is_some()
        );
    }
}
