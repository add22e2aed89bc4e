// English morphological variant production: verb, noun, and adjective
// inflections, irregular tables first, regular rules otherwise.

use hashbrown::HashSet;

use hanlex_core::character::is_vowel;

/// Irregular verbs: (base, past tense, past participle). Slash-separated
/// alternatives expand to separate forms.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was/were", "been"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("do", "did", "done"),
    ("drink", "drank", "drunk"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("find", "found", "found"),
    ("fly", "flew", "flown"),
    ("get", "got", "got/gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("leave", "left", "left"),
    ("let", "let", "let"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("put", "put", "put"),
    ("read", "read", "read"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("sing", "sang", "sung"),
    ("speak", "spoke", "spoken"),
    ("stand", "stood", "stood"),
    ("swim", "swam", "swum"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("write", "wrote", "written"),
];

/// Irregular noun plurals.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("child", "children"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("louse", "lice"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Irregular adjectives: (base, comparative, superlative). Slash-separated
/// alternatives expand to separate forms.
const IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("bad", "worse", "worst"),
    ("far", "farther/further", "farthest/furthest"),
    ("good", "better", "best"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
    ("old", "older/elder", "oldest/eldest"),
    ("well", "better", "best"),
];

/// All morphological forms of `word`: the original plus its verb, noun, and
/// adjective inflections.
pub fn all_word_forms(word: &str) -> HashSet<String> {
    let mut forms = HashSet::new();
    forms.insert(word.to_string());
    forms.extend(verb_forms(word));
    forms.extend(noun_forms(word));
    forms.extend(adjective_forms(word));
    forms
}

/// Verb inflections: 3rd-person singular, past tense, past participle,
/// present participle. Irregular verbs take their table forms instead of
/// the regular past rules.
pub fn verb_forms(verb: &str) -> HashSet<String> {
    let mut forms = HashSet::new();
    forms.insert(verb.to_string());

    if let Some(&(_, past, participle)) = IRREGULAR_VERBS.iter().find(|(base, _, _)| *base == verb)
    {
        forms.extend(past.split('/').map(str::to_string));
        forms.extend(participle.split('/').map(str::to_string));
        return forms;
    }

    let chars: Vec<char> = verb.chars().collect();

    // 3rd-person singular
    if ends_in_sibilant(&chars) {
        forms.insert(format!("{verb}es"));
    } else if ends_in_consonant_y(&chars) {
        forms.insert(format!("{}ies", drop_last(verb)));
    } else {
        forms.insert(format!("{verb}s"));
    }

    // Past tense / past participle
    if chars.last() == Some(&'e') {
        forms.insert(format!("{verb}d"));
    } else if ends_in_consonant_y(&chars) {
        forms.insert(format!("{}ied", drop_last(verb)));
    } else if doubles_final_consonant(&chars) {
        forms.insert(format!("{verb}{}ed", chars[chars.len() - 1]));
    } else {
        forms.insert(format!("{verb}ed"));
    }

    // Present participle
    if chars.last() == Some(&'e') {
        forms.insert(format!("{}ing", drop_last(verb)));
    } else if doubles_final_consonant(&chars) {
        forms.insert(format!("{verb}{}ing", chars[chars.len() - 1]));
    } else {
        forms.insert(format!("{verb}ing"));
    }

    forms
}

/// Noun inflections: plural and possessive.
pub fn noun_forms(noun: &str) -> HashSet<String> {
    let mut forms = HashSet::new();
    forms.insert(noun.to_string());

    if let Some(&(_, plural)) = IRREGULAR_PLURALS.iter().find(|(base, _)| *base == noun) {
        forms.insert(plural.to_string());
    } else {
        let chars: Vec<char> = noun.chars().collect();
        if ends_in_sibilant(&chars) {
            forms.insert(format!("{noun}es"));
        } else if ends_in_consonant_y(&chars) {
            forms.insert(format!("{}ies", drop_last(noun)));
        } else if ends_in_vowel_y(&chars) {
            forms.insert(format!("{noun}s"));
        } else if ends_in_consonant_o(&chars) {
            forms.insert(format!("{noun}es"));
        } else {
            forms.insert(format!("{noun}s"));
        }
    }

    // Possessive
    if noun.ends_with('s') {
        forms.insert(format!("{noun}'"));
    } else {
        forms.insert(format!("{noun}'s"));
    }

    forms
}

/// Adjective inflections: comparative and superlative.
pub fn adjective_forms(adjective: &str) -> HashSet<String> {
    let mut forms = HashSet::new();
    forms.insert(adjective.to_string());

    if let Some(&(_, comparative, superlative)) = IRREGULAR_ADJECTIVES
        .iter()
        .find(|(base, _, _)| *base == adjective)
    {
        forms.extend(comparative.split('/').map(str::to_string));
        forms.extend(superlative.split('/').map(str::to_string));
        return forms;
    }

    let chars: Vec<char> = adjective.chars().collect();
    if chars.last() == Some(&'e') {
        forms.insert(format!("{adjective}r"));
        forms.insert(format!("{adjective}st"));
    } else if ends_in_consonant_y(&chars) {
        forms.insert(format!("{}ier", drop_last(adjective)));
        forms.insert(format!("{}iest", drop_last(adjective)));
    } else if doubles_final_consonant(&chars) {
        let last = chars[chars.len() - 1];
        forms.insert(format!("{adjective}{last}er"));
        forms.insert(format!("{adjective}{last}est"));
    } else {
        forms.insert(format!("{adjective}er"));
        forms.insert(format!("{adjective}est"));
    }

    forms
}

/// Whether the final consonant doubles before -ed/-ing/-er/-est: final
/// letter is a consonant, the penultimate a vowel, and the word is short
/// enough (or the antepenultimate is not a vowel) that the stressed
/// CVC pattern holds.
fn doubles_final_consonant(chars: &[char]) -> bool {
    let n = chars.len();
    if n < 2 {
        return false;
    }
    !is_vowel(chars[n - 1])
        && is_vowel(chars[n - 2])
        && (n <= 2 || !is_vowel(chars[n - 3]))
}

fn ends_in_sibilant(chars: &[char]) -> bool {
    matches!(chars.last(), Some('s' | 'x' | 'z' | 'h'))
}

fn ends_in_consonant_y(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2 && chars[n - 1] == 'y' && !is_vowel(chars[n - 2])
}

fn ends_in_vowel_y(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2 && chars[n - 1] == 'y' && is_vowel(chars[n - 2])
}

fn ends_in_consonant_o(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2 && chars[n - 1] == 'o' && !is_vowel(chars[n - 2])
}

fn drop_last(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(forms: &HashSet<String>, expected: &[&str]) {
        for e in expected {
            assert!(forms.contains(*e), "missing form {e:?} in {forms:?}");
        }
    }

    #[test]
    fn irregular_verb_with_alternatives() {
        let forms = verb_forms("be");
        has(&forms, &["be", "was", "were", "been"]);
        let forms = verb_forms("get");
        has(&forms, &["get", "got", "gotten"]);
    }

    #[test]
    fn regular_verb_third_person() {
        has(&verb_forms("wash"), &["washes"]);
        has(&verb_forms("study"), &["studies"]);
        has(&verb_forms("play"), &["plays"]);
    }

    #[test]
    fn regular_verb_past_and_participle() {
        has(&verb_forms("love"), &["loved", "loving"]);
        has(&verb_forms("study"), &["studied", "studying"]);
        has(&verb_forms("stop"), &["stopped", "stopping"]);
        has(&verb_forms("walk"), &["walked", "walking"]);
    }

    #[test]
    fn irregular_plural() {
        has(&noun_forms("child"), &["child", "children"]);
        has(&noun_forms("mouse"), &["mice"]);
    }

    #[test]
    fn regular_plurals() {
        has(&noun_forms("box"), &["boxes"]);
        has(&noun_forms("city"), &["cities"]);
        has(&noun_forms("boy"), &["boys"]);
        has(&noun_forms("potato"), &["potatoes"]);
        has(&noun_forms("cat"), &["cats"]);
    }

    #[test]
    fn possessive_forms() {
        has(&noun_forms("cat"), &["cat's"]);
        has(&noun_forms("boss"), &["bosses", "boss'"]);
    }

    #[test]
    fn irregular_adjectives() {
        has(&adjective_forms("good"), &["better", "best"]);
        has(&adjective_forms("far"), &["farther", "further", "farthest", "furthest"]);
    }

    #[test]
    fn regular_adjectives() {
        has(&adjective_forms("nice"), &["nicer", "nicest"]);
        has(&adjective_forms("happy"), &["happier", "happiest"]);
        has(&adjective_forms("big"), &["bigger", "biggest"]);
        has(&adjective_forms("smart"), &["smarter", "smartest"]);
        has(&adjective_forms("tall"), &["taller", "tallest"]);
    }

    #[test]
    fn all_forms_include_original() {
        let forms = all_word_forms("run");
        assert!(forms.contains("run"));
        // verb table form plus noun and adjective rule forms
        has(&forms, &["ran", "runs", "run's", "runner"]);
    }

    #[test]
    fn doubling_rule_boundaries() {
        // "stop": p after vowel o after consonant t -> doubles
        assert!(doubles_final_consonant(&['s', 't', 'o', 'p']));
        // "keep": double vowel, no doubling
        assert!(!doubles_final_consonant(&['k', 'e', 'e', 'p']));
        // two-letter CV C word doubles
        assert!(doubles_final_consonant(&['u', 'p']));
        // single letter never doubles
        assert!(!doubles_final_consonant(&['a']));
    }
}
