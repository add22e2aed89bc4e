// Bounded single-edit misspelling candidate production.
//
// Candidates are generated in a fixed order (deletions, substitutions,
// insertions, transpositions, pattern substitutions) and deduplicated in
// first-generation order, so the cap always keeps the cheapest edits.

use hashbrown::HashSet;

use hanlex_core::character::{VOWELS, is_vowel};

use crate::typing::{MISSPELLING_PATTERNS, keyboard_neighbors};

/// Hard cap on the number of generated variants.
pub const MAX_VARIANTS: usize = 200;

/// Words longer than this take the reduced generator.
const LONG_WORD_LEN: usize = 15;

/// Insertion-ordered string set.
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    fn insert(&mut self, s: String) {
        if self.seen.insert(s.clone()) {
            self.items.push(s);
        }
    }

    fn into_vec(mut self, cap: usize) -> Vec<String> {
        self.items.truncate(cap);
        self.items
    }
}

/// Generate single-edit misspelling candidates for `word`, capped at
/// `MAX_VARIANTS` members. The word itself is always the first member.
///
/// Words longer than 15 characters use a reduced generator (pattern
/// substitutions plus transpositions near the word edges) to bound cost.
pub fn spelling_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    if chars.len() > LONG_WORD_LEN {
        return limited_variants(word, &chars);
    }

    let mut variants = OrderedSet::new();
    variants.insert(word.to_string());

    // Single-character deletions.
    for i in 0..chars.len() {
        variants.insert(without_char(&chars, i));
    }

    // Substitutions, restricted to QWERTY-adjacent letters.
    for i in 0..chars.len() {
        for &neighbor in keyboard_neighbors(chars[i]) {
            variants.insert(with_char_replaced(&chars, i, neighbor));
        }
    }

    // Insertions: a vowel before a vowel, or an adjacent consonant before
    // a consonant.
    for i in 0..chars.len() {
        if is_vowel(chars[i]) {
            for &vowel in VOWELS {
                variants.insert(with_char_inserted(&chars, i, vowel));
            }
        } else {
            for &neighbor in keyboard_neighbors(chars[i]) {
                if !is_vowel(neighbor) {
                    variants.insert(with_char_inserted(&chars, i, neighbor));
                }
            }
        }
    }

    // Adjacent-pair transpositions.
    for i in 0..chars.len().saturating_sub(1) {
        variants.insert(with_pair_swapped(&chars, i));
    }

    // Misspelling pattern substitutions (all occurrences).
    for &(from, to) in MISSPELLING_PATTERNS {
        if word.contains(from) {
            variants.insert(word.replace(from, to));
        }
    }

    variants.into_vec(MAX_VARIANTS)
}

/// Reduced generator for long words: pattern substitutions plus
/// transpositions within the first and last three positions.
fn limited_variants(word: &str, chars: &[char]) -> Vec<String> {
    let mut variants = OrderedSet::new();
    variants.insert(word.to_string());

    for &(from, to) in MISSPELLING_PATTERNS {
        if word.contains(from) {
            variants.insert(word.replace(from, to));
        }
    }

    let n = chars.len();
    for i in 0..3.min(n.saturating_sub(1)) {
        variants.insert(with_pair_swapped(chars, i));
    }
    for i in n.saturating_sub(3)..n.saturating_sub(1) {
        variants.insert(with_pair_swapped(chars, i));
    }

    variants.into_vec(MAX_VARIANTS)
}

fn without_char(chars: &[char], i: usize) -> String {
    let mut s = String::with_capacity(chars.len());
    s.extend(&chars[..i]);
    s.extend(&chars[i + 1..]);
    s
}

fn with_char_replaced(chars: &[char], i: usize, c: char) -> String {
    let mut s = String::with_capacity(chars.len() + 1);
    s.extend(&chars[..i]);
    s.push(c);
    s.extend(&chars[i + 1..]);
    s
}

fn with_char_inserted(chars: &[char], i: usize, c: char) -> String {
    let mut s = String::with_capacity(chars.len() + 2);
    s.extend(&chars[..i]);
    s.push(c);
    s.extend(&chars[i..]);
    s
}

fn with_pair_swapped(chars: &[char], i: usize) -> String {
    let mut swapped = chars.to_vec();
    swapped.swap(i, i + 1);
    swapped.into_iter().collect()
}
