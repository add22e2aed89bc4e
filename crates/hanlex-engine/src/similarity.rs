// Composite string similarity: the 4-signal metric behind approximate
// dictionary matching.
//
// The composite is a fixed-weight blend of a phonetic code comparison, a
// typo-aware edit distance, a misspelling-pattern heuristic, and a q-gram
// overlap. All four signals are symmetric in their arguments, so the
// composite is too.

use hashbrown::HashSet;

use hanlex_core::character::is_vowel;

use crate::typing::{MISSPELLING_PATTERNS, are_keyboard_neighbors};

/// Signal weights: phonetic and edit distance dominate, pattern and q-gram
/// refine.
const WEIGHT_PHONETIC: f64 = 0.35;
const WEIGHT_EDIT_DISTANCE: f64 = 0.35;
const WEIGHT_COMMON_PATTERN: f64 = 0.15;
const WEIGHT_QGRAM: f64 = 0.15;

/// Above this length the full DP edit distance is replaced by a cheap
/// position-wise approximation to bound cost.
const EDIT_DISTANCE_MAX_LEN: usize = 30;

/// Compute the composite similarity of two strings, in [0, 1].
///
/// Case-insensitive. An exact (case-insensitive) match returns 1.0 without
/// evaluating any signal.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    WEIGHT_PHONETIC * phonetic_similarity(&a, &b)
        + WEIGHT_EDIT_DISTANCE * edit_distance_similarity(&a, &b)
        + WEIGHT_COMMON_PATTERN * common_pattern_similarity(&a, &b)
        + WEIGHT_QGRAM * qgram_similarity(&a, &b)
}

// ---------------------------------------------------------------------------
// Phonetic signal
// ---------------------------------------------------------------------------

/// Compare simplified phonetic codes: 1.0 for equal codes, otherwise the
/// fraction of positionally matching code characters over the longer code.
fn phonetic_similarity(a: &str, b: &str) -> f64 {
    let ca = phonetic_code(a);
    let cb = phonetic_code(b);

    if ca == cb {
        return 1.0;
    }

    let matches = ca.iter().zip(cb.iter()).filter(|(x, y)| x == y).count();
    if matches == 0 {
        return 0.0;
    }
    matches as f64 / ca.len().max(cb.len()) as f64
}

/// Simplified phonetic code:
///
/// - consecutive duplicate letters collapse,
/// - vowels collapse to a single leading `A` marker (emitted only while the
///   code is still empty),
/// - consonants map to digit classes, `h`/`w`/`y` are dropped,
/// - anything else passes through unchanged.
///
/// The duplicate tracker advances only on the consonant path, so a vowel
/// run never shadows a following consonant.
fn phonetic_code(s: &str) -> Vec<char> {
    let mut code = Vec::new();
    let mut prev = '\0';

    for c in s.chars() {
        if c == prev {
            continue;
        }
        if is_vowel(c) {
            if code.is_empty() {
                code.push('A');
            }
            continue;
        }
        match c {
            'b' | 'p' | 'f' | 'v' => code.push('1'),
            'c' | 'k' | 'g' | 'j' | 'q' => code.push('2'),
            'd' | 't' => code.push('3'),
            'l' => code.push('4'),
            'm' | 'n' => code.push('5'),
            'r' => code.push('6'),
            's' | 'z' | 'x' => code.push('7'),
            'h' | 'w' | 'y' => {}
            _ => code.push(c),
        }
        prev = c;
    }

    code
}

// ---------------------------------------------------------------------------
// Edit distance signal
// ---------------------------------------------------------------------------

/// Damerau-Levenshtein similarity normalized to [0, 1].
///
/// Substitutions between QWERTY-adjacent keys cost 0.5 instead of 1.
/// Strings longer than `EDIT_DISTANCE_MAX_LEN` fall back to a position-wise
/// match fraction.
fn edit_distance_similarity(a: &str, b: &str) -> f64 {
    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();

    if ca.len() > EDIT_DISTANCE_MAX_LEN || cb.len() > EDIT_DISTANCE_MAX_LEN {
        return positional_match_fraction(&ca, &cb);
    }

    let n = ca.len();
    let m = cb.len();
    let mut dp = vec![vec![0.0f64; m + 1]; n + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as f64;
    }
    for j in 0..=m {
        dp[0][j] = j as f64;
    }

    for i in 1..=n {
        for j in 1..=m {
            if ca[i - 1] == cb[j - 1] {
                dp[i][j] = dp[i - 1][j - 1];
                continue;
            }

            let substitution_cost = if are_keyboard_neighbors(ca[i - 1], cb[j - 1]) {
                0.5
            } else {
                1.0
            };
            let mut best = (dp[i - 1][j - 1] + substitution_cost)
                .min(dp[i - 1][j] + 1.0)
                .min(dp[i][j - 1] + 1.0);

            // Adjacent transposition.
            if i > 1 && j > 1 && ca[i - 1] == cb[j - 2] && ca[i - 2] == cb[j - 1] {
                best = best.min(dp[i - 2][j - 2] + 1.0);
            }

            dp[i][j] = best;
        }
    }

    let max_len = n.max(m);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - dp[n][m] / max_len as f64
}

/// Cheap long-string approximation: fraction of positions where the two
/// strings agree, over the longer length.
fn positional_match_fraction(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matches as f64 / max_len as f64
}

// ---------------------------------------------------------------------------
// Common pattern signal
// ---------------------------------------------------------------------------

/// Heuristic score from shared misspelling structure:
///
/// - +0.5 per pattern-table entry present cross-wise in the two strings,
/// - +0.3 per doubled-letter run of the same letter shared between them,
/// - +0.2 for matching first letters, +0.2 for matching last letters,
///
/// clamped to 1.0.
fn common_pattern_similarity(a: &str, b: &str) -> f64 {
    let mut score: f64 = 0.0;

    for &(p1, p2) in MISSPELLING_PATTERNS {
        let a_has_p1 = a.contains(p1);
        let a_has_p2 = a.contains(p2);
        let b_has_p1 = b.contains(p1);
        let b_has_p2 = b.contains(p2);

        if (a_has_p1 && b_has_p2) || (a_has_p2 && b_has_p1) {
            score += 0.5;
        }
    }

    let ca: Vec<char> = a.chars().collect();
    let cb: Vec<char> = b.chars().collect();

    for i in 1..ca.len() {
        if ca[i] == ca[i - 1] {
            for j in 1..cb.len() {
                if cb[j] == cb[j - 1] && ca[i] == cb[j] {
                    score += 0.3;
                }
            }
        }
    }

    if let (Some(x), Some(y)) = (ca.first(), cb.first()) {
        if x == y {
            score += 0.2;
        }
    }
    if let (Some(x), Some(y)) = (ca.last(), cb.last()) {
        if x == y {
            score += 0.2;
        }
    }

    score.min(1.0)
}

// ---------------------------------------------------------------------------
// Q-gram signal
// ---------------------------------------------------------------------------

/// Character-bigram similarity with `#` boundary sentinels: Jaccard overlap
/// of the bigram sets plus +0.1 per positionally matching bigram (in
/// first-occurrence order), clamped to 1.0.
///
/// Falls back to the edit-distance signal when either string is shorter
/// than one bigram.
fn qgram_similarity(a: &str, b: &str) -> f64 {
    if a.chars().count() < 2 || b.chars().count() < 2 {
        return edit_distance_similarity(a, b);
    }

    let grams_a = bigrams(a);
    let grams_b = bigrams(b);

    let set_a: HashSet<&(char, char)> = grams_a.iter().collect();
    let set_b: HashSet<&(char, char)> = grams_b.iter().collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    let position_bonus = grams_a
        .iter()
        .zip(grams_b.iter())
        .filter(|(x, y)| x == y)
        .count() as f64
        * 0.1;

    (intersection as f64 / union as f64 + position_bonus).min(1.0)
}

/// Unique bigrams of `#s#` in first-occurrence order.
fn bigrams(s: &str) -> Vec<(char, char)> {
    let mut padded: Vec<char> = Vec::with_capacity(s.len() + 2);
    padded.push('#');
    padded.extend(s.chars());
    padded.push('#');

    let mut seen = HashSet::new();
    let mut grams = Vec::new();
    for w in padded.windows(2) {
        let gram = (w[0], w[1]);
        if seen.insert(gram) {
            grams.push(gram);
        }
    }
    grams
}
