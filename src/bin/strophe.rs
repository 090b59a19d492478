//! Command-line interface for strophe
//! This binary parses a poem file, runs rhyme analysis against a
//! pronunciation dictionary, and prints the results.
//!
//! Usage:
//!   strophe `<path>` --dictionary `<dict>` [--by-stanza] [--json]

use std::process;
use std::sync::Arc;

use clap::{Arg, ArgAction, Command};

use strophe::poem::parsing::parse_poem;
use strophe::poem::pronunciation::{PhonemeDictionary, PronunciationLookup};
use strophe::poem::rhyme::RhymeScope;

fn main() {
    let matches = Command::new("strophe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting poems and their rhyme structure")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the poem file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("Path to a CMU-format pronunciation dictionary"),
        )
        .arg(Arg::new("title").long("title").help("Poem title"))
        .arg(Arg::new("author").long("author").help("Poem author"))
        .arg(
            Arg::new("by-stanza")
                .long("by-stanza")
                .help("Report rhyme groups per stanza instead of poem-wide")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit rhyme groups as JSON")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");

    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        process::exit(1);
    });

    let lookup: Arc<dyn PronunciationLookup> = match matches.get_one::<String>("dictionary") {
        Some(dict_path) => {
            let dict_text = std::fs::read_to_string(dict_path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {}", dict_path, e);
                process::exit(1);
            });
            Arc::new(PhonemeDictionary::parse_cmudict(&dict_text))
        }
        None => Arc::new(PhonemeDictionary::new()),
    };

    let poem = parse_poem(
        &text,
        matches.get_one::<String>("title").map(String::as_str),
        matches.get_one::<String>("author").map(String::as_str),
        lookup,
    );

    println!("{}", poem);
    println!();

    let scheme = poem.rhyme_scheme();
    println!("Rhyme scheme: {}", scheme.join(" "));
    println!();

    let scope = if matches.get_flag("by-stanza") {
        RhymeScope::ByStanza
    } else {
        RhymeScope::Global
    };
    let groups = poem.analyzer().rhyme_groups(scope);

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&groups).unwrap_or_else(|e| {
            eprintln!("Failed to serialize rhyme groups: {}", e);
            process::exit(1);
        });
        println!("{}", json);
        return;
    }

    if groups.is_empty() {
        println!("No rhyme groups found.");
        return;
    }
    println!("Rhyme groups:");
    for group in &groups {
        let prefix = group
            .stanza_number
            .map(|n| format!("[stanza {}] ", n))
            .unwrap_or_default();
        let words: Vec<&str> = group.words.keys().map(String::as_str).collect();
        println!("  {}{}: {}", prefix, group.phoneme_key, words.join(", "));
    }
}
