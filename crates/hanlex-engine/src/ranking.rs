// The approximate-match ranking pipelines.
//
// Both directions follow the same shape: score every entry independently
// (fanned out across the rayon pool, memoized through the pairwise cache),
// then filter, sort, de-duplicate, and truncate sequentially. The heuristic
// multipliers are empirically tuned weights, not probabilities: scores
// routinely exceed 1.0 before filtering, which is fine because only the
// relative order matters.

use hashbrown::HashSet;
use rayon::prelude::*;
use tracing::debug;

use hanlex_core::character::{is_cjk_word, is_single_cjk};
use hanlex_core::normalize;
use hanlex_core::{Direction, Entry};

use crate::cache::ResultCache;
use crate::similarity::similarity;
use crate::store::{CommonWordSet, WordStore};
use crate::variants::spelling_variants;
use crate::wordform::all_word_forms;

/// Ranked output is truncated to this many entries.
pub const MAX_RESULTS: usize = 24;

/// Score cutoff in the headword direction.
const HEADWORD_CUTOFF: f64 = 0.01;

/// Score cutoff in the translation direction.
const TRANSLATION_CUTOFF: f64 = 0.001;

/// Base similarity an entry needs before the refined per-variant pass runs.
const REFINE_THRESHOLD: f64 = 0.5;

// Heuristic weight constants. The relative ordering matters (exact variant
// and primary-sense matches dominate, common/basic words boost, non-exact
// senses of basic vocabulary demote); the literal values are tunable.
const VARIANT_EXACT_WEIGHT: f64 = 128.0;
const VARIANT_PRIMARY_SENSE_WEIGHT: f64 = 64.0;
const COMMON_WORD_WEIGHT: f64 = 16.0;
const BASIC_HEADWORD_WEIGHT: f64 = 32.0;
const PRIMARY_SENSE_WEIGHT: f64 = 256.0;
const SENSE_POSITION_WEIGHT: f64 = 128.0;
const BASIC_PRIMARY_WEIGHT: f64 = 512.0;
const BASIC_EXACT_WEIGHT: f64 = 128.0;
const BASIC_DEMOTE_WEIGHT: f64 = 0.1;
const CJK_CHAR_PRIMARY_WEIGHT: f64 = 1024.0;
const CJK_CHAR_EXACT_WEIGHT: f64 = 256.0;
const CJK_CHAR_DEMOTE_WEIGHT: f64 = 0.1;

/// Return up to `MAX_RESULTS` entries ranked by plausibility for `query`.
///
/// Empty or whitespace-only queries return an empty list; the ranking path
/// never fails.
pub fn find_similar_words(
    store: &WordStore,
    common: &CommonWordSet,
    cache: &ResultCache,
    query: &str,
    direction: Direction,
) -> Vec<Entry> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    if let Some(cached) = cache.get_ranked(query, direction) {
        debug!(query, ?direction, "ranked result cache hit");
        return cached;
    }

    let results = match direction {
        Direction::HeadwordToTranslation => rank_by_headword(store, common, cache, query),
        Direction::TranslationToHeadword => rank_by_translation(store, common, cache, query),
    };

    if !results.is_empty() {
        cache.put_ranked(query, direction, results.clone());
    }
    results
}

/// Return the single best entry for `query`, or `None`.
///
/// Uses exact-match logic only: in the headword direction each
/// morphological/spelling variant of the query is tried against the
/// headwords in a deterministic order; in the translation direction the
/// normalized translation must match exactly. Shares the ranked-result
/// cache with `find_similar_words`.
pub fn search(
    store: &WordStore,
    cache: &ResultCache,
    query: &str,
    direction: Direction,
) -> Option<Entry> {
    if query.trim().is_empty() {
        return None;
    }

    if let Some(cached) = cache.get_ranked(query, direction) {
        if let Some(first) = cached.into_iter().next() {
            return Some(first);
        }
    }

    let query_lower = query.to_lowercase();
    let found = match direction {
        Direction::HeadwordToTranslation => ordered_variants(&query_lower)
            .into_iter()
            .find_map(|variant| {
                store
                    .entries()
                    .iter()
                    .find(|e| e.normalized_headword() == variant)
            }),
        Direction::TranslationToHeadword => store
            .entries()
            .iter()
            .find(|e| normalize::normalized_translation(e.translation()) == query_lower),
    };

    if let Some(entry) = found {
        cache.put_ranked(query, direction, vec![entry.clone()]);
        return Some(entry.clone());
    }
    None
}

/// Short CJK terms and short common non-CJK terms get amplified (or, on a
/// poor match, demoted) weighting.
pub fn is_basic_word(word: &str, common: &CommonWordSet) -> bool {
    if word.is_empty() {
        return false;
    }
    if is_cjk_word(word) {
        word.chars().count() <= 2
    } else {
        word.chars().count() <= 4 && common.contains(&word.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Headword -> translation
// ---------------------------------------------------------------------------

fn rank_by_headword(
    store: &WordStore,
    common: &CommonWordSet,
    cache: &ResultCache,
    query: &str,
) -> Vec<Entry> {
    let query_lower = query.to_lowercase();

    // An exact headword match bypasses all weighting.
    if let Some(exact) = store
        .entries()
        .iter()
        .find(|e| e.normalized_headword() == query_lower)
    {
        debug!(query, "exact headword match short-circuit");
        return vec![exact.clone()];
    }

    let variants = variant_set(&query_lower);

    let scored: Vec<(&Entry, f64)> = store
        .entries()
        .par_iter()
        .map(|entry| {
            let headword = entry.headword();
            let head_lower = entry.normalized_headword();

            let mut best = cache.score_with(headword, query, || similarity(headword, query));

            if variants.contains(head_lower.as_str()) {
                // The headword itself is a known form of the query.
                best = 1.0;
            } else if best > REFINE_THRESHOLD {
                let first_sense = normalize::primary_sense(&entry.simplified_translation())
                    .to_lowercase();

                for variant in &variants {
                    let mut score =
                        cache.score_with(headword, variant, || similarity(headword, variant));

                    if head_lower == *variant {
                        score *= VARIANT_EXACT_WEIGHT;
                    } else if first_sense == *variant {
                        score *= VARIANT_PRIMARY_SENSE_WEIGHT;
                    }
                    if common.contains(&head_lower) {
                        score *= COMMON_WORD_WEIGHT;
                    }
                    if is_basic_word(headword, common) {
                        score *= BASIC_HEADWORD_WEIGHT;
                    }

                    best = best.max(score);
                }
            }

            (entry, best)
        })
        .collect();

    finalize(scored, HEADWORD_CUTOFF)
}

/// The union of morphological forms and spelling-edit candidates.
fn variant_set(query_lower: &str) -> HashSet<String> {
    let mut variants = all_word_forms(query_lower);
    variants.extend(spelling_variants(query_lower));
    variants
}

/// Variants in a deterministic probe order for `search`: the query itself,
/// then sorted word forms, then spelling variants in generation order.
fn ordered_variants(query_lower: &str) -> Vec<String> {
    let mut forms: Vec<String> = all_word_forms(query_lower).into_iter().collect();
    forms.sort();

    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for s in std::iter::once(query_lower.to_string())
        .chain(forms)
        .chain(spelling_variants(query_lower))
    {
        if seen.insert(s.clone()) {
            ordered.push(s);
        }
    }
    ordered
}

// ---------------------------------------------------------------------------
// Translation -> headword
// ---------------------------------------------------------------------------

fn rank_by_translation(
    store: &WordStore,
    common: &CommonWordSet,
    cache: &ResultCache,
    query: &str,
) -> Vec<Entry> {
    let query_lower = query.to_lowercase();
    let query_is_basic = is_basic_word(query, common);
    let query_is_cjk_char = is_single_cjk(query);

    let scored: Vec<(&Entry, f64)> = store
        .entries()
        .par_iter()
        .map(|entry| {
            let simplified = entry.simplified_translation();
            let mut score = cache.score_with(&simplified, query, || similarity(&simplified, query));

            let senses = normalize::senses(&simplified);
            let primary_matches = senses
                .first()
                .is_some_and(|s| s.to_lowercase() == query_lower);

            if primary_matches {
                score *= PRIMARY_SENSE_WEIGHT;
            }

            // Earlier senses are primary: an exact match at position i is
            // weighted by 128 / (i + 1).
            let mut exact_sense = false;
            for (i, sense) in senses.iter().enumerate() {
                if sense.to_lowercase() == query_lower {
                    score *= SENSE_POSITION_WEIGHT / (i + 1) as f64;
                    exact_sense = true;
                    break;
                }
            }

            if common.contains(&entry.normalized_headword()) {
                score *= COMMON_WORD_WEIGHT;
            }

            if query_is_basic {
                score *= if primary_matches {
                    BASIC_PRIMARY_WEIGHT
                } else if exact_sense {
                    BASIC_EXACT_WEIGHT
                } else {
                    BASIC_DEMOTE_WEIGHT
                };
            }

            if query_is_cjk_char {
                score *= if primary_matches {
                    CJK_CHAR_PRIMARY_WEIGHT
                } else if exact_sense {
                    CJK_CHAR_EXACT_WEIGHT
                } else {
                    CJK_CHAR_DEMOTE_WEIGHT
                };
            }

            (entry, score)
        })
        .collect();

    finalize(scored, TRANSLATION_CUTOFF)
}

// ---------------------------------------------------------------------------
// Shared tail: filter, sort, de-duplicate, truncate
// ---------------------------------------------------------------------------

/// The sequential tail of both pipelines. The stable sort preserves store
/// order for equal scores, making output deterministic.
fn finalize(scored: Vec<(&Entry, f64)>, cutoff: f64) -> Vec<Entry> {
    let mut scored: Vec<(&Entry, f64)> = scored
        .into_iter()
        .filter(|(_, score)| *score > cutoff)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut seen: HashSet<&Entry> = HashSet::new();
    let mut results = Vec::new();
    for (entry, _) in scored {
        if seen.insert(entry) {
            results.push(entry.clone());
            if results.len() == MAX_RESULTS {
                break;
            }
        }
    }
    results
}
