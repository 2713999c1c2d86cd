use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

use textdigest::nlp::stopwords::{is_supported_language, SUPPORTED_LANGUAGES};
use textdigest::profile::SummaryProfile;
use textdigest::{summarize_batch, SummarizerConfig, SummaryOutcome, SummaryStats, WordChars};

/// Exit code when at least one input had nothing to summarize.
const EXIT_NO_SENTENCES: u8 = 2;

#[derive(Parser)]
#[command(name = "textdigest")]
#[command(
    version,
    about = "Summarize text by picking its highest-scoring sentences"
)]
struct Cli {
    /// Input files; reads stdin when omitted or given as `-`
    files: Vec<PathBuf>,

    /// Number of sentences to keep
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// JSON summary profile
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop stopwords of this language (e.g. `en`) before scoring
    #[arg(long)]
    stopwords: Option<String>,

    /// Word character class
    #[arg(long, value_enum)]
    word_chars: Option<WordCharsArg>,

    /// Print one JSON object per input
    #[arg(long)]
    json: bool,

    /// Report word counts and compression
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum WordCharsArg {
    Ascii,
    Unicode,
}

impl From<WordCharsArg> for WordChars {
    fn from(arg: WordCharsArg) -> Self {
        match arg {
            WordCharsArg::Ascii => WordChars::Ascii,
            WordCharsArg::Unicode => WordChars::Unicode,
        }
    }
}

struct Input {
    source: String,
    text: String,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("textdigest=warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let profile = match &cli.config {
        Some(path) => SummaryProfile::load(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => SummaryProfile::default(),
    };
    let (mut config, warnings) = profile.resolve()?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    apply_overrides(&mut config, &cli)?;

    let inputs = read_inputs(&cli.files)?;
    for input in &inputs {
        profile
            .runtime
            .check(&input.text)
            .with_context(|| format!("rejected {}", input.source))?;
    }

    let texts: Vec<&str> = inputs.iter().map(|i| i.text.as_str()).collect();
    let outcomes = summarize_batch(&texts, &config)?;
    tracing::debug!(inputs = inputs.len(), "summarized");

    let mut any_empty = false;
    for (input, outcome) in inputs.iter().zip(&outcomes) {
        any_empty |= outcome.is_empty();
        if cli.json {
            print_json(input, outcome, cli.stats)?;
        } else {
            print_plain(input, outcome, cli.stats, inputs.len() > 1);
        }
    }

    Ok(if any_empty {
        ExitCode::from(EXIT_NO_SENTENCES)
    } else {
        ExitCode::SUCCESS
    })
}

fn apply_overrides(config: &mut SummarizerConfig, cli: &Cli) -> Result<()> {
    if let Some(n) = cli.sentences {
        config.sentence_count = n;
    }
    if let Some(lang) = &cli.stopwords {
        if !is_supported_language(lang) {
            bail!(
                "no stopword list for \"{lang}\" (supported: {})",
                SUPPORTED_LANGUAGES.join(", ")
            );
        }
        config.stopwords = Some(lang.clone());
    }
    if let Some(word_chars) = cli.word_chars {
        config.word_chars = word_chars.into();
    }
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    files
        .iter()
        .map(|path| {
            if path == Path::new("-") {
                read_stdin()
            } else {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(Input {
                    source: path.display().to_string(),
                    text,
                })
            }
        })
        .collect()
}

fn read_stdin() -> Result<Input> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(Input {
        source: "-".to_string(),
        text,
    })
}

fn print_plain(input: &Input, outcome: &SummaryOutcome, stats: bool, header: bool) {
    if header {
        println!("==> {} <==", input.source);
    }
    match outcome {
        SummaryOutcome::Summary(summary) => {
            println!("{}", summary.text);
            if stats {
                let s = SummaryStats::measure(&input.text, &summary.text);
                eprintln!(
                    "{}: {} -> {} words ({:.0}%), {} of {} sentences",
                    input.source,
                    s.input_words,
                    s.summary_words,
                    s.compression * 100.0,
                    summary.sentence_count(),
                    summary.pool_size
                );
            }
        }
        SummaryOutcome::NoValidSentences => {
            eprintln!("{}: No valid sentences found.", input.source);
        }
    }
}

fn print_json(input: &Input, outcome: &SummaryOutcome, stats: bool) -> Result<()> {
    let mut record = match outcome {
        SummaryOutcome::Summary(summary) => json!({
            "source": input.source,
            "status": "summary",
            "text": summary.text,
            "sentence_count": summary.sentence_count(),
            "pool_size": summary.pool_size,
        }),
        SummaryOutcome::NoValidSentences => json!({
            "source": input.source,
            "status": "no_valid_sentences",
        }),
    };
    if stats {
        let summary_text = outcome.text().unwrap_or_default();
        record["stats"] = serde_json::to_value(SummaryStats::measure(&input.text, summary_text))?;
    }
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}
