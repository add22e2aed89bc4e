// hanlex-lookup: Exact lookup of dictionary entries.
//
// Resolves each query to its single best entry, trying morphological and
// spelling variants of the query against the headwords (or, with -r, exact
// translation matches). Prints `query<TAB>headword<TAB>translation` for
// hits and `query: (not found)` otherwise.
//
// Usage:
//   hanlex-lookup -d DICT [OPTIONS] [QUERY...]
//
// Options:
//   -d, --dict PATH    Dictionary file (TSV or JSON)
//   -c, --common PATH  Common-word list (one token per line)
//   -r, --reverse      Look up by translation instead of headword
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use hanlex_core::Direction;
use hanlex_engine::Lexicon;

fn main() {
    hanlex_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, common_path, args) = hanlex_cli::parse_paths(&args);

    if hanlex_cli::wants_help(&args) {
        println!("hanlex-lookup: Exact lookup of dictionary entries.");
        println!();
        println!("Usage: hanlex-lookup -d DICT [OPTIONS] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, looks up each one.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH    Dictionary file (TSV or JSON)");
        println!("  -c, --common PATH  Common-word list (one token per line)");
        println!("  -r, --reverse      Look up by translation instead of headword");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut direction = Direction::HeadwordToTranslation;
    let mut queries: Vec<String> = Vec::new();
    for arg in &args {
        if arg == "-r" || arg == "--reverse" {
            direction = Direction::TranslationToHeadword;
        } else if !arg.starts_with('-') {
            queries.push(arg.clone());
        }
    }

    let dict_path = dict_path.unwrap_or_else(|| hanlex_cli::fatal("-d/--dict is required"));
    let mut lexicon =
        hanlex_cli::load_lexicon(&dict_path).unwrap_or_else(|e| hanlex_cli::fatal(&e));
    if let Some(common_path) = &common_path {
        let common =
            hanlex_cli::load_common_words(common_path).unwrap_or_else(|e| hanlex_cli::fatal(&e));
        lexicon.set_common_words(common);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let lookup = |query: &str, lexicon: &Lexicon, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match lexicon.search(query, direction) {
            Some(entry) => {
                let _ = writeln!(out, "{query}\t{}\t{}", entry.headword(), entry.translation());
            }
            None => {
                let _ = writeln!(out, "{query}: (not found)");
            }
        }
    };

    if queries.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            lookup(query, &lexicon, &mut out);
        }
    } else {
        for query in &queries {
            lookup(query, &lexicon, &mut out);
        }
    }
}
