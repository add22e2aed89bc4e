// hanlex-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

use hanlex_core::Entry;
use hanlex_engine::{CommonWordSet, Lexicon};

/// Initialize logging from the `RUST_LOG` environment variable. Silent
/// unless the variable is set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Load a dictionary file and build a `Lexicon` from it.
///
/// Two formats are recognized by extension:
/// - `.json`: an array of `{"headword": ..., "translation": ...}` objects
/// - anything else: tab-separated `headword<TAB>translation` lines, with
///   blank lines and `#` comment lines skipped
pub fn load_lexicon(path: &str) -> Result<Lexicon, String> {
    let entries = if Path::new(path).extension().is_some_and(|e| e == "json") {
        load_json_entries(path)?
    } else {
        load_tsv_entries(path)?
    };
    tracing::info!(path, entries = entries.len(), "dictionary loaded");
    Lexicon::with_entries(entries).map_err(|e| format!("{path}: {e}"))
}

fn load_json_entries(path: &str) -> Result<Vec<Entry>, String> {
    let data =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    serde_json::from_str(&data).map_err(|e| format!("failed to parse {path}: {e}"))
}

fn load_tsv_entries(path: &str) -> Result<Vec<Entry>, String> {
    let data =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let mut entries = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((headword, translation)) = line.split_once('\t') else {
            return Err(format!(
                "{path}:{}: expected headword<TAB>translation",
                lineno + 1
            ));
        };
        entries.push(Entry::new(headword.trim(), translation.trim()));
    }
    Ok(entries)
}

/// Load a common-word list: one token per line, `#` comments skipped.
pub fn load_common_words(path: &str) -> Result<CommonWordSet, String> {
    let data =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    Ok(CommonWordSet::from_tokens(
        data.lines().filter(|l| !l.trim_start().starts_with('#')),
    ))
}

/// Parse `--dict=PATH`, `--dict PATH`, or `-d PATH` plus the optional
/// `--common PATH` argument from command line args.
///
/// Returns `(dict_path, common_path, remaining_args)`.
pub fn parse_paths(args: &[String]) -> (Option<String>, Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut common_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict=") {
            dict_path = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--common=") {
            common_path = Some(val.to_string());
        } else if arg == "--dict" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else if arg == "--common" || arg == "-c" {
            if i + 1 < args.len() {
                common_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, common_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
