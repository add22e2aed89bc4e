// Mutation-aware result cache: ranked-result lists and pairwise similarity
// scores, bounded by a single recency ledger.
//
// The two stores are concurrent maps that overlapping ranking calls may
// read and write freely. The ledger is the one sequential structure: it
// tracks recency for keys of both stores and is serialized behind a mutex.
// Evicting a ledger key removes it from its dependent store while the
// ledger lock is held, so a tracked key and its store entry never diverge.

use std::num::NonZeroUsize;

use dashmap::DashMap;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use hanlex_core::{Direction, Entry};

/// Maximum number of tracked keys across both stores.
pub const MAX_CACHE_SIZE: usize = 1000;

/// One recency-ledger key, spanning both key spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LedgerKey {
    Query(String, Direction),
    Pair(String, String),
}

/// Memoizes ranked query results and pairwise similarity scores.
///
/// Constructed and owned explicitly (typically by a `Lexicon`), never a
/// process-wide static, so tests can build isolated instances.
pub struct ResultCache {
    ranked: DashMap<(String, Direction), Vec<Entry>>,
    scores: DashMap<(String, String), f64>,
    ledger: Mutex<LruCache<LedgerKey, ()>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_capacity(MAX_CACHE_SIZE)
    }

    /// A cache tracking at most `capacity` keys (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            ranked: DashMap::new(),
            scores: DashMap::new(),
            ledger: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached ranked results for a query, as an owned copy of the list.
    pub fn get_ranked(&self, query: &str, direction: Direction) -> Option<Vec<Entry>> {
        let results = self
            .ranked
            .get(&(query.to_string(), direction))
            .map(|r| r.value().clone())?;
        self.touch(LedgerKey::Query(query.to_string(), direction));
        Some(results)
    }

    /// Store ranked results for a query.
    pub fn put_ranked(&self, query: &str, direction: Direction, results: Vec<Entry>) {
        self.ranked.insert((query.to_string(), direction), results);
        self.touch(LedgerKey::Query(query.to_string(), direction));
    }

    /// Cached pairwise similarity score.
    pub fn get_score(&self, a: &str, b: &str) -> Option<f64> {
        let score = self
            .scores
            .get(&(a.to_string(), b.to_string()))
            .map(|s| *s.value())?;
        self.touch(LedgerKey::Pair(a.to_string(), b.to_string()));
        Some(score)
    }

    /// Store a pairwise similarity score.
    pub fn put_score(&self, a: &str, b: &str, score: f64) {
        self.scores.insert((a.to_string(), b.to_string()), score);
        self.touch(LedgerKey::Pair(a.to_string(), b.to_string()));
    }

    /// Look up a pairwise score, computing and storing it on a miss.
    pub fn score_with(&self, a: &str, b: &str, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(score) = self.get_score(a, b) {
            return score;
        }
        let score = compute();
        self.put_score(a, b, score);
        score
    }

    /// Unconditionally clear all three structures. Called on every word
    /// collection mutation.
    pub fn clear(&self) {
        let mut ledger = self.ledger.lock();
        self.ranked.clear();
        self.scores.clear();
        ledger.clear();
        debug!("result cache cleared");
    }

    /// Number of keys currently tracked by the recency ledger.
    pub fn tracked_keys(&self) -> usize {
        self.ledger.lock().len()
    }

    /// Record an access, evicting the oldest tracked key (and its store
    /// entry) if the ledger is over capacity.
    fn touch(&self, key: LedgerKey) {
        let mut ledger = self.ledger.lock();
        if let Some((evicted, ())) = ledger.push(key.clone(), ()) {
            // push returns the displaced entry; only a genuine LRU eviction
            // (a different key) has a store entry to drop.
            if evicted != key {
                debug!(?evicted, "cache eviction");
                match evicted {
                    LedgerKey::Query(query, direction) => {
                        self.ranked.remove(&(query, direction));
                    }
                    LedgerKey::Pair(a, b) => {
                        self.scores.remove(&(a, b));
                    }
                }
            }
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
