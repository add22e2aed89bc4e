// Character classification: English vowels/consonants and CJK ideographs.

/// English vowels (lowercase).
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Returns true for the five English vowels, either case.
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
    )
}

/// Returns true for ASCII letters that are not vowels.
///
/// `y` counts as a consonant here; the morphology rules that care about
/// `y` endings test for it explicitly.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Returns true if `c` is a CJK unified ideograph.
///
/// Covers the Unified Repertoire (U+4E00..U+9FFF) plus Extensions A
/// (U+3400..U+4DBF) and B (U+20000..U+2A6DF), the blocks that occur in
/// practice in bilingual dictionary data.
pub fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0x20000..=0x2A6DF
    )
}

/// Returns true if `s` is non-empty and consists solely of CJK ideographs.
pub fn is_cjk_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_cjk)
}

/// Returns true if `s` is exactly one character and that character is a
/// CJK ideograph.
pub fn is_single_cjk(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_cjk(c))
}
