//! bntranslit - transliterate between Latin phonetic notation and Bengali script
//!
//! Transliterates its arguments, or standard input line by line when none are given.

use anyhow::Context;
use bangla_phonetic::{Mode, RuleCorpus, TransliterateOptions, Transliterator};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "bntranslit", version, about)]
struct Cli {
    /// Transliteration mode: avro, orva, banglish or lishbang
    #[arg(short, long, default_value = "avro")]
    mode: Mode,

    /// Load rules from a JSON corpus instead of the bundled Avro rules
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print every Bengali word with its romanization instead of the whole text
    #[arg(short, long)]
    words: bool,

    /// Text to transliterate; read from stdin when omitted
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let corpus = match &cli.rules {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open rule corpus {}", path.display()))?;
            RuleCorpus::from_reader(BufReader::new(file))
                .with_context(|| format!("cannot load rule corpus {}", path.display()))?
        }
        None => RuleCorpus::avro(),
    };
    let engine = Transliterator::new(corpus);
    let options = TransliterateOptions::new(cli.mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&engine, &line?, options, cli.words, &mut out)?;
        }
    } else {
        emit(&engine, &cli.text.join(" "), options, cli.words, &mut out)?;
    }
    Ok(())
}

fn emit(
    engine: &Transliterator,
    text: &str,
    options: TransliterateOptions,
    words: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if words {
        for word in engine.romanize_words(text) {
            writeln!(out, "{}\t{}", word.word, word.romanized)?;
        }
    } else {
        writeln!(out, "{}", engine.transliterate(text, options)?)?;
    }
    Ok(())
}
