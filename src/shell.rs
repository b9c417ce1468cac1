//! Interactive query shell.
//!
//! A line-oriented REPL over stdin: boolean search, ranked search, per-term
//! index stats, and corpus stats. Query text goes through the same analysis
//! pipeline as the indexed documents.

use std::io::{self, BufRead, Write};

use crate::analysis;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::{QuarryError, Result};
use crate::search::{BooleanOperator, SearchEngine};

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Boolean {
        operator: BooleanOperator,
        query: String,
    },
    Rank(String),
    Term(String),
    Vocab,
    Stats,
    Help,
    Quit,
}

/// Parse one input line into a command.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "and" | "or" => {
            if rest.is_empty() {
                return Err(QuarryError::Validation(format!(
                    "usage: {verb} <query terms>"
                )));
            }
            Ok(Command::Boolean {
                operator: verb.parse()?,
                query: rest.to_string(),
            })
        }
        "rank" => {
            if rest.is_empty() {
                return Err(QuarryError::Validation("usage: rank <query terms>".into()));
            }
            Ok(Command::Rank(rest.to_string()))
        }
        "term" => {
            if rest.is_empty() {
                return Err(QuarryError::Validation("usage: term <term>".into()));
            }
            Ok(Command::Term(rest.to_string()))
        }
        "vocab" => Ok(Command::Vocab),
        "stats" => Ok(Command::Stats),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(QuarryError::Validation(format!(
            "unknown command: {other} (try 'help')"
        ))),
    }
}

const HELP: &str = "\
commands:
  and <query>    boolean search, all terms required
  or <query>     boolean search, any term matches
  rank <query>   TF-IDF ranked search
  term <term>    index statistics for one term
  vocab          vocabulary size and a sample of terms
  stats          corpus statistics
  help           this message
  quit           leave the shell";

/// Run the REPL until EOF or `quit`.
pub fn run(engine: &SearchEngine, corpus: &Corpus, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "quarry: {} documents indexed. Type 'help' for commands.", corpus.len())?;
    write!(stdout, "quarry> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    let output = execute(&command, engine, corpus, config);
                    writeln!(stdout, "{output}")?;
                }
                Err(e) => writeln!(stdout, "{e}")?,
            }
        }
        write!(stdout, "quarry> ")?;
        stdout.flush()?;
    }
    writeln!(stdout, "bye")?;
    Ok(())
}

/// Execute one command and render its output.
pub fn execute(
    command: &Command,
    engine: &SearchEngine,
    corpus: &Corpus,
    config: &Config,
) -> String {
    match command {
        Command::Boolean { operator, query } => {
            let terms = analysis::analyze(query, &config.analysis);
            if terms.is_empty() {
                return "query produced no searchable terms".to_string();
            }
            let matched = engine.boolean_search(&terms, *operator);
            let mut out = format!(
                "{} ({} {}): {} document(s)",
                query,
                operator,
                display_terms(&terms),
                matched.len()
            );
            for doc_id in matched.iter().take(config.search.display_limit) {
                out.push_str(&format!("\n  {}  {}", doc_id, doc_name(corpus, *doc_id)));
            }
            if matched.len() > config.search.display_limit {
                out.push_str("\n  ...");
            }
            out
        }
        Command::Rank(query) => {
            let terms = analysis::analyze(query, &config.analysis);
            if terms.is_empty() {
                return "query produced no searchable terms".to_string();
            }
            let ranked = engine.rank_by_relevance(&terms, config.search.default_top_n);
            if ranked.is_empty() {
                return format!("{query}: no document scored above zero");
            }
            let mut out = format!("{} ({}): top {}", query, display_terms(&terms), ranked.len());
            for (doc_id, score) in &ranked {
                out.push_str(&format!(
                    "\n  {score:>10.4}  {}  {}",
                    doc_id,
                    doc_name(corpus, *doc_id)
                ));
            }
            out
        }
        Command::Term(raw) => {
            // Normalize the way documents were normalized, so stemmed
            // vocabularies still resolve (e.g. "running" -> "run").
            let terms = analysis::analyze(raw, &config.analysis);
            let Some(term) = terms.first() else {
                return format!("'{raw}' normalizes to nothing indexable");
            };
            match engine.index().term_stats(term) {
                Some(stats) => {
                    let mut out = format!(
                        "term '{}': df={}, corpus frequency={}",
                        stats.term, stats.doc_frequency, stats.corpus_frequency
                    );
                    for (doc_id, tf) in &stats.sample_postings {
                        out.push_str(&format!("\n  {doc_id}  tf={tf}"));
                    }
                    if stats.doc_frequency as usize > stats.sample_postings.len() {
                        out.push_str("\n  ...");
                    }
                    out
                }
                None => format!("term '{term}' not in index"),
            }
        }
        Command::Vocab => {
            let mut vocab = engine.index().vocabulary();
            vocab.sort_unstable();
            let sample: Vec<&str> = vocab.iter().copied().take(10).collect();
            format!(
                "{} terms; first {}: {}",
                vocab.len(),
                sample.len(),
                sample.join(", ")
            )
        }
        Command::Stats => {
            let index = engine.index();
            format!(
                "{} documents, {} terms, average document length {:.2}",
                index.total_docs(),
                index.vocabulary_size(),
                index.avg_doc_length()
            )
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

fn display_terms(terms: &[String]) -> String {
    format!("[{}]", terms.join(", "))
}

fn doc_name(corpus: &Corpus, doc_id: crate::corpus::DocId) -> String {
    corpus
        .get(doc_id)
        .map(|d| d.name.clone())
        .unwrap_or_default()
}
