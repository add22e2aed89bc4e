// hanlex-engine: the approximate-match ranking engine for bilingual
// dictionary lookup.
//
// Given a possibly misspelled or inflected query and a lookup direction,
// the engine returns an ordered, bounded list of plausible entries by
// combining a 4-signal string similarity metric, English morphology,
// spelling-edit candidates, and empirically weighted heuristics, backed by
// a mutation-aware result cache.

pub mod cache;
pub mod handle;
pub mod ranking;
pub mod similarity;
pub mod store;
pub mod typing;
pub mod variants;
pub mod wordform;

pub use cache::ResultCache;
pub use handle::Lexicon;
pub use store::{CommonWordSet, StoreError, WordStore};
