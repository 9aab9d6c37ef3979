use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use spellphone::converter::{ConvertOptions, LetterDensity, RankWeightSum, ScoreStrategy};
use spellphone::dict::source::{self, read_from_path};
use spellphone::engine::{EngineConfig, SpellPhone};

#[derive(Parser)]
#[command(name = "spelltool", about = "Phone-number mnemonic diagnostics")]
struct Cli {
    /// Directory for JSONL trace output (requires the `trace` feature)
    #[arg(long)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a phone number to ranked mnemonic spellings
    Convert {
        /// The phone number (non-digits are stripped)
        number: String,
        /// Language code
        #[arg(long, default_value = "en")]
        lang: String,
        /// Path to a local word-list file (JSON array/object or quoted tokens)
        #[arg(long)]
        words: Option<PathBuf>,
        /// Download the word list from the built-in source registry instead
        #[arg(long)]
        fetch: bool,
        /// Maximum number of spellings to print
        #[arg(short, long, default_value = "20")]
        n: usize,
        /// Rank by summed segment weights instead of letter density
        #[arg(long)]
        rank_weights: bool,
        /// Drop spellings with a non-positive score
        #[arg(long)]
        drop_nonpositive: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Download a word list and report its size
    Fetch {
        /// Language code
        #[arg(long, default_value = "en")]
        lang: String,
        /// Write the fetched words to this path as a JSON array
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List languages with a built-in word-list source
    Languages,
}

/// One ranked spelling in `--json` output.
#[derive(Serialize)]
struct SpellingOut {
    rank: usize,
    score: i64,
    text: String,
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    // Held until exit so the non-blocking writer flushes.
    let _trace_guard = cli
        .trace_dir
        .as_deref()
        .and_then(spellphone::trace::init_tracing);
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Convert {
            number,
            lang,
            words,
            fetch,
            n,
            rank_weights,
            drop_nonpositive,
            json,
        } => cmd_convert(
            &number,
            &lang,
            words.as_deref(),
            fetch,
            n,
            rank_weights,
            drop_nonpositive,
            json,
        ),
        Command::Fetch { lang, out } => cmd_fetch(&lang, out.as_deref()),
        Command::Languages => {
            for lang in source::supported_languages() {
                println!("{lang}");
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_convert(
    number: &str,
    lang: &str,
    words: Option<&Path>,
    fetch: bool,
    n: usize,
    rank_weights: bool,
    drop_nonpositive: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let word_list = match (words, fetch) {
        (Some(path), _) => read_from_path(path)?,
        (None, true) => source::source_for(lang)
            .ok_or_else(|| format!("no built-in source for language `{lang}`"))?
            .fetch()?,
        (None, false) => return Err("pass --words <path> or --fetch".into()),
    };

    let mut engine = SpellPhone::new(EngineConfig::default());
    engine.add_word_list(lang, word_list);

    let strategy: &dyn ScoreStrategy = if rank_weights {
        &RankWeightSum
    } else {
        &LetterDensity
    };
    let mut spellings =
        engine.convert_with(number, lang, strategy, ConvertOptions { drop_nonpositive })?;
    spellings.truncate(n);

    if json {
        let out: Vec<SpellingOut> = spellings
            .iter()
            .enumerate()
            .map(|(i, s)| SpellingOut {
                rank: i + 1,
                score: s.score,
                text: s.text(),
                tokens: s.tokens.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if spellings.is_empty() {
        println!("(no spellings)");
    } else {
        for (i, s) in spellings.iter().enumerate() {
            println!("{:>3}. [{:>4}] {}", i + 1, s.score, s);
        }
    }
    Ok(())
}

fn cmd_fetch(lang: &str, out: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let source = source::source_for(lang)
        .ok_or_else(|| format!("no built-in source for language `{lang}`"))?;
    eprintln!("fetching {}", source.url);
    let words = source.fetch()?;
    println!("{} words", words.len());

    if let Some(path) = out {
        let mut sorted: Vec<&str> = words.iter().collect();
        sorted.sort_unstable();
        fs::write(path, serde_json::to_string(&sorted)?)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
