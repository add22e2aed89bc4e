//! End-to-end ranking behavior over a small bilingual dictionary.

use hanlex_core::{Direction, Entry};
use hanlex_engine::ranking::MAX_RESULTS;
use hanlex_engine::similarity::similarity;
use hanlex_engine::{CommonWordSet, Lexicon};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn lexicon(entries: &[(&str, &str)]) -> Lexicon {
    Lexicon::with_entries(
        entries
            .iter()
            .map(|(h, t)| Entry::new(*h, *t))
            .collect(),
    )
    .expect("well-formed fixture entries")
}

fn headwords(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.headword()).collect()
}

// ---------------------------------------------------------------------------
// Exact-match precedence and determinism
// ---------------------------------------------------------------------------

#[test]
fn exact_headword_match_returns_singleton() {
    let lexicon = lexicon(&[
        ("receive", "收到; 接收"),
        ("receiver", "接收器"),
        ("received", "已收到"),
    ]);
    let results = lexicon.find_similar("receive", Direction::HeadwordToTranslation);
    assert_eq!(headwords(&results), vec!["receive"]);

    // case-insensitively too
    let results = lexicon.find_similar("RECEIVE", Direction::HeadwordToTranslation);
    assert_eq!(headwords(&results), vec!["receive"]);
}

#[test]
fn repeated_calls_are_deterministic() {
    let lexicon = lexicon(&[
        ("good", "好"),
        ("food", "食物"),
        ("goods", "货物"),
        ("mood", "心情"),
    ]);
    let first = lexicon.find_similar("god", Direction::HeadwordToTranslation);
    for _ in 0..5 {
        assert_eq!(
            lexicon.find_similar("god", Direction::HeadwordToTranslation),
            first
        );
    }
}

// ---------------------------------------------------------------------------
// Cache invalidation
// ---------------------------------------------------------------------------

#[test]
fn mutations_invalidate_cached_queries() {
    let mut lexicon = lexicon(&[("good", "好")]);
    let before = lexicon.find_similar("god", Direction::HeadwordToTranslation);
    assert_eq!(headwords(&before), vec!["good"]);

    lexicon.add(Entry::new("god", "神")).unwrap();
    let after = lexicon.find_similar("god", Direction::HeadwordToTranslation);
    assert_eq!(headwords(&after), vec!["god"]);

    lexicon.remove(&Entry::new("god", "神"));
    let removed = lexicon.find_similar("god", Direction::HeadwordToTranslation);
    assert_eq!(headwords(&removed), vec!["good"]);

    lexicon
        .modify(&Entry::new("good", "好"), Entry::new("goodness", "善良"))
        .unwrap();
    let modified = lexicon.find_similar("good", Direction::HeadwordToTranslation);
    assert!(!headwords(&modified).contains(&"good"));
}

// ---------------------------------------------------------------------------
// Similarity metric properties
// ---------------------------------------------------------------------------

#[test]
fn similarity_is_reflexive() {
    for s in ["a", "receive", "internationalization", "爱情", "mixed词"] {
        assert_eq!(similarity(s, s), 1.0, "not reflexive for {s:?}");
    }
}

#[test]
fn similarity_is_symmetric() {
    let samples = [
        "receive", "recieve", "good", "god", "analyse", "analyze", "爱", "爱情", "a", "",
    ];
    for a in samples {
        for b in samples {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {a:?}/{b:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[test]
fn output_is_bounded() {
    let entries: Vec<(String, String)> = (0..100)
        .map(|i| (format!("word{i:02}"), format!("词{i}")))
        .collect();
    let lexicon = Lexicon::with_entries(
        entries
            .iter()
            .map(|(h, t)| Entry::new(h.clone(), t.clone()))
            .collect(),
    )
    .unwrap();

    let results = lexicon.find_similar("word", Direction::HeadwordToTranslation);
    assert!(results.len() <= MAX_RESULTS);
}

#[test]
fn empty_and_garbage_queries_return_empty() {
    let lexicon = lexicon(&[("cat", "猫")]);
    for direction in [
        Direction::HeadwordToTranslation,
        Direction::TranslationToHeadword,
    ] {
        assert!(lexicon.find_similar("", direction).is_empty());
        assert!(lexicon.find_similar("   ", direction).is_empty());
        assert!(lexicon.search("", direction).is_none());
    }
}

// ---------------------------------------------------------------------------
// Scenario: misspelling via pattern table + transposition
// ---------------------------------------------------------------------------

#[test]
fn misspelled_query_surfaces_correct_headword() {
    let lexicon = lexicon(&[("receive", "收到; 接收"), ("recite", "背诵")]);
    let results = lexicon.find_similar("recieve", Direction::HeadwordToTranslation);
    assert_eq!(results[0].headword(), "receive");
}

// ---------------------------------------------------------------------------
// Scenario: single deletion beats double edit
// ---------------------------------------------------------------------------

#[test]
fn deletion_outranks_double_edit() {
    let lexicon = lexicon(&[("good", "好"), ("food", "食物")]);
    let results = lexicon.find_similar("god", Direction::HeadwordToTranslation);
    let names = headwords(&results);
    let good = names.iter().position(|h| *h == "good").unwrap();
    assert!(
        names.iter().position(|h| *h == "food").is_none_or(|food| good < food),
        "good should rank above food in {names:?}"
    );
}

// ---------------------------------------------------------------------------
// Scenario: Chinese exact primary sense
// ---------------------------------------------------------------------------

#[test]
fn chinese_exact_primary_sense_returns_singleton() {
    let lexicon = lexicon(&[("cat", "猫"), ("dog", "狗")]);
    let results = lexicon.find_similar("猫", Direction::TranslationToHeadword);
    assert_eq!(headwords(&results), vec!["cat"]);
}

// ---------------------------------------------------------------------------
// Scenario: single-CJK-character escalation
// ---------------------------------------------------------------------------

#[test]
fn single_cjk_char_escalates_primary_sense() {
    let lexicon = lexicon(&[
        ("love", "爱; 爱情"),
        ("darling", "亲爱的; 爱"),
        ("affection", "感情, 爱"),
    ]);
    let results = lexicon.find_similar("爱", Direction::TranslationToHeadword);
    assert_eq!(results[0].headword(), "love");
}

// ---------------------------------------------------------------------------
// Common-word weighting
// ---------------------------------------------------------------------------

#[test]
fn common_word_set_boosts_common_headwords() {
    let entries = &[("make", "制作; 做"), ("bake", "烘烤; 做")];

    // Without weighting "bake" ties structurally with "make" for "做"
    // except for store order; with "make" marked common it must win.
    let mut weighted = lexicon(entries);
    weighted.set_common_words(CommonWordSet::from_tokens(["make"]));
    let results = weighted.find_similar("做", Direction::TranslationToHeadword);
    assert_eq!(results[0].headword(), "make");
}

#[test]
fn absent_common_word_set_is_tolerated() {
    let lexicon = lexicon(&[("good", "好")]);
    let results = lexicon.find_similar("好", Direction::TranslationToHeadword);
    assert_eq!(results[0].headword(), "good");
}

// ---------------------------------------------------------------------------
// Search (single best entry)
// ---------------------------------------------------------------------------

#[test]
fn search_returns_single_best_entry() {
    let lexicon = lexicon(&[("study", "学习"), ("student", "学生")]);
    let found = lexicon
        .search("studys", Direction::HeadwordToTranslation)
        .expect("misspelled form resolves");
    assert_eq!(found.headword(), "study");

    assert!(lexicon.search("xyzzy", Direction::HeadwordToTranslation).is_none());
}

// ---------------------------------------------------------------------------
// JSON interchange (serde round trip through the entry model)
// ---------------------------------------------------------------------------

#[test]
fn entries_round_trip_through_json() {
    let json = r#"[
        {"headword": "receive", "translation": "vt. 收到; 接收"},
        {"headword": "cat", "translation": "猫 (动物)"}
    ]"#;
    let entries: Vec<Entry> = serde_json::from_str(json).unwrap();
    let lexicon = Lexicon::with_entries(entries).unwrap();

    let results = lexicon.find_similar("收到", Direction::TranslationToHeadword);
    assert_eq!(results[0].headword(), "receive");
}
