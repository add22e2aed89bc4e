// hanlex-suggest: Ranked approximate lookup of dictionary entries.
//
// Ranks plausible entries for each query, tolerating misspellings and
// inflected forms. Prints the top matches as `headword<TAB>translation`
// lines, indented under the query.
//
// Usage:
//   hanlex-suggest -d DICT [OPTIONS] [QUERY...]
//
// Options:
//   -d, --dict PATH    Dictionary file (TSV or JSON)
//   -c, --common PATH  Common-word list (one token per line)
//   -r, --reverse      Match against translations instead of headwords
//   -n, --max N        Maximum number of results per query (default: 10)
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use hanlex_core::Direction;
use hanlex_engine::Lexicon;

fn main() {
    hanlex_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, common_path, args) = hanlex_cli::parse_paths(&args);

    if hanlex_cli::wants_help(&args) {
        println!("hanlex-suggest: Ranked approximate lookup of dictionary entries.");
        println!();
        println!("Usage: hanlex-suggest -d DICT [OPTIONS] [QUERY...]");
        println!();
        println!("If QUERY arguments are given, ranks matches for each one.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH    Dictionary file (TSV or JSON)");
        println!("  -c, --common PATH  Common-word list (one token per line)");
        println!("  -r, --reverse      Match against translations instead of headwords");
        println!("  -n, --max N        Maximum number of results per query (default: 10)");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut direction = Direction::HeadwordToTranslation;
    let mut max_results: usize = 10;
    let mut queries: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-r" || arg == "--reverse" {
            direction = Direction::TranslationToHeadword;
        } else if arg == "-n" || arg == "--max" {
            if i + 1 < args.len() {
                max_results = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| hanlex_cli::fatal("invalid number for --max"));
                skip_next = true;
            } else {
                hanlex_cli::fatal("--max requires a value");
            }
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

    let suggest = |query: &str, lexicon: &Lexicon, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let results = lexicon.find_similar(query, direction);
        if results.is_empty() {
            let _ = writeln!(out, "{query}: (no matches)");
        } else {
            let _ = writeln!(out, "{query}:");
            for entry in results.iter().take(max_results) {
                let _ = writeln!(out, "  {}\t{}", entry.headword(), entry.translation());
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
            suggest(query, &lexicon, &mut out);
        }
    } else {
        for query in &queries {
            suggest(query, &lexicon, &mut out);
        }
    }
}
