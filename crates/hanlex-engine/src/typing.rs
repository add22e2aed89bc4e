// Typing-error tables shared by similarity scoring and variant generation:
// QWERTY key adjacency and paired misspelling fragments.

/// QWERTY adjacency table: each letter paired with the keys surrounding it
/// on a US layout.
const KEYBOARD_NEIGHBORS: &[(char, &[char])] = &[
    ('q', &['w', 'a']),
    ('w', &['q', 'e', 's', 'a']),
    ('e', &['w', 'r', 'd', 's']),
    ('r', &['e', 't', 'f', 'd']),
    ('t', &['r', 'y', 'g', 'f']),
    ('y', &['t', 'u', 'h', 'g']),
    ('u', &['y', 'i', 'j', 'h']),
    ('i', &['u', 'o', 'k', 'j']),
    ('o', &['i', 'p', 'l', 'k']),
    ('p', &['o', 'l']),
    ('a', &['q', 'w', 's', 'z']),
    ('s', &['w', 'e', 'd', 'x', 'z', 'a']),
    ('d', &['e', 'r', 'f', 'c', 'x', 's']),
    ('f', &['r', 't', 'g', 'v', 'c', 'd']),
    ('g', &['t', 'y', 'h', 'b', 'v', 'f']),
    ('h', &['y', 'u', 'j', 'n', 'b', 'g']),
    ('j', &['u', 'i', 'k', 'm', 'n', 'h']),
    ('k', &['i', 'o', 'l', 'm', 'j']),
    ('l', &['o', 'p', 'k']),
    ('z', &['a', 's', 'x']),
    ('x', &['s', 'd', 'c', 'z']),
    ('c', &['d', 'f', 'v', 'x']),
    ('v', &['f', 'g', 'b', 'c']),
    ('b', &['g', 'h', 'n', 'v']),
    ('n', &['h', 'j', 'm', 'b']),
    ('m', &['j', 'k', 'n']),
];

/// Paired misspelling fragments. The table is directed: both orientations
/// of each confusable pair are listed, so scoring and substitution can
/// consume it without reversing entries.
pub const MISSPELLING_PATTERNS: &[(&str, &str)] = &[
    ("ie", "ei"),
    ("ei", "ie"),
    ("a", "e"),
    ("e", "a"),
    ("ant", "ent"),
    ("ent", "ant"),
    ("able", "ible"),
    ("ible", "able"),
    ("ance", "ence"),
    ("ence", "ance"),
    ("ize", "ise"),
    ("ise", "ize"),
    ("yze", "yse"),
    ("yse", "yze"),
    ("ll", "l"),
    ("l", "ll"),
    ("mm", "m"),
    ("m", "mm"),
    ("nn", "n"),
    ("n", "nn"),
    ("rr", "r"),
    ("r", "rr"),
    ("ss", "s"),
    ("s", "ss"),
    ("cc", "c"),
    ("c", "cc"),
    ("pp", "p"),
    ("p", "pp"),
    ("tt", "t"),
    ("t", "tt"),
    ("ff", "f"),
    ("f", "ff"),
    ("gg", "g"),
    ("g", "gg"),
    ("tion", "sion"),
    ("sion", "tion"),
    ("eable", "able"),
    ("able", "eable"),
];

/// The keys surrounding `c` on a QWERTY layout, or an empty slice for
/// characters that are not lowercase letters.
pub fn keyboard_neighbors(c: char) -> &'static [char] {
    KEYBOARD_NEIGHBORS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, neighbors)| *neighbors)
        .unwrap_or(&[])
}

/// Whether `a` and `b` sit on adjacent QWERTY keys.
pub fn are_keyboard_neighbors(a: char, b: char) -> bool {
    keyboard_neighbors(a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_lookup() {
        assert!(are_keyboard_neighbors('q', 'w'));
        assert!(are_keyboard_neighbors('s', 'a'));
        assert!(!are_keyboard_neighbors('q', 'p'));
        assert!(keyboard_neighbors('1').is_empty());
        assert!(keyboard_neighbors('猫').is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        for &(key, neighbors) in KEYBOARD_NEIGHBORS {
            for &n in neighbors {
                assert!(
                    are_keyboard_neighbors(n, key),
                    "{n} -> {key} missing from table"
                );
            }
        }
    }

    #[test]
    fn pattern_table_contains_both_orientations() {
        for &(from, to) in MISSPELLING_PATTERNS {
            assert!(
                MISSPELLING_PATTERNS.contains(&(to, from)),
                "missing reverse of ({from}, {to})"
            );
        }
    }
}
