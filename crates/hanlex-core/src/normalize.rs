// Translation normalization and sense splitting.
//
// This is the single authoritative annotation-stripping routine. It backs
// both `Entry` equality/hashing and translation-direction scoring, so the
// two can never disagree about what counts as annotation noise.

/// Strip annotation noise from a translation:
///
/// - parenthetical content `(...)` (ASCII or full-width parentheses),
/// - bracketed content `[...]`,
/// - part-of-speech markers, i.e. an ASCII word token immediately followed
///   by `.` and whitespace (`n.`, `adj.`, `vt.`, ...),
///
/// then trims surrounding whitespace. Unbalanced opening delimiters are
/// left untouched rather than swallowing the rest of the string.
pub fn simplify_translation(text: &str) -> String {
    let stripped = strip_delimited(text);
    let stripped = strip_pos_markers(&stripped);
    stripped.trim().to_string()
}

/// The lowercase form a headword is compared and hashed under.
pub fn normalized_headword(headword: &str) -> String {
    headword.to_lowercase()
}

/// The lowercase annotation-free form a translation is compared and
/// hashed under.
pub fn normalized_translation(translation: &str) -> String {
    simplify_translation(translation).to_lowercase()
}

/// Split a (already simplified) translation into senses on half- and
/// full-width commas and semicolons, trimming each segment.
///
/// Positions matter: earlier senses are primary. Empty segments are kept
/// so positions stay aligned with the delimiter structure.
pub fn senses(text: &str) -> Vec<&str> {
    text.split([',', ';', '\u{FF0C}', '\u{FF1B}'])
        .map(str::trim)
        .collect()
}

/// The primary (first) sense of an already simplified translation.
pub fn primary_sense(text: &str) -> &str {
    senses(text).first().copied().unwrap_or("")
}

/// Remove `(...)`, `（...）` and `[...]` spans. A span is only removed when
/// its closing delimiter is present.
fn strip_delimited(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let close = match chars[i] {
            '(' => Some(')'),
            '\u{FF08}' => Some('\u{FF09}'),
            '[' => Some(']'),
            _ => None,
        };
        if let Some(close) = close {
            if let Some(end) = chars[i + 1..].iter().position(|&c| c == close) {
                i += end + 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Remove ASCII word tokens that end in `.` and are followed by
/// whitespace. The whitespace itself is kept.
fn strip_pos_markers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if is_word_char(chars[i]) && (i == 0 || !is_word_char(chars[i - 1])) {
            let mut j = i;
            while j < chars.len() && is_word_char(chars[j]) {
                j += 1;
            }
            // Token followed by '.' then whitespace is a POS marker.
            if j < chars.len()
                && chars[j] == '.'
                && chars.get(j + 1).is_some_and(|c| c.is_whitespace())
            {
                i = j + 1;
                continue;
            }
            out.extend(&chars[i..j]);
            i = j;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_parenthetical_content() {
        assert_eq!(simplify_translation("猫 (动物)"), "猫");
        assert_eq!(simplify_translation("猫（口语）"), "猫");
    }

    #[test]
    fn strips_bracketed_content() {
        assert_eq!(simplify_translation("收到 [正式]"), "收到");
    }

    #[test]
    fn strips_pos_markers() {
        assert_eq!(simplify_translation("n. 猫"), "猫");
        assert_eq!(simplify_translation("vt. 收到; 接收"), "收到; 接收");
    }

    #[test]
    fn pos_marker_requires_following_whitespace() {
        // A trailing "etc." has no following whitespace and survives.
        assert_eq!(simplify_translation("dogs, cats etc."), "dogs, cats etc.");
    }

    #[test]
    fn unbalanced_delimiters_are_kept() {
        assert_eq!(simplify_translation("好 (incomplete"), "好 (incomplete");
    }

    #[test]
    fn senses_split_on_both_widths() {
        assert_eq!(senses("收到; 接收"), vec!["收到", "接收"]);
        assert_eq!(senses("爱，爱情；喜爱"), vec!["爱", "爱情", "喜爱"]);
    }

    #[test]
    fn primary_sense_is_first_segment() {
        assert_eq!(primary_sense("爱; 爱情"), "爱");
        assert_eq!(primary_sense(""), "");
    }

    #[test]
    fn normalized_forms_lowercase() {
        assert_eq!(normalized_headword("Receive"), "receive");
        assert_eq!(normalized_translation("To Get (colloq.)"), "to get");
    }
}
