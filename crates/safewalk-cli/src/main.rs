//! `safewalk` command-line interface.
//!
//! Every command prints JSON (or the rendered FIR) on stdout. Logs go to
//! stderr so output can be piped.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use safewalk_core::{
    analyze_with_lexicon, greeting, label_details, needs_follow_up, render_report,
    summarize_history, AnalysisResult, Coach, CoachResponse, Context, ConversationAggregator,
    ConversationMessage, ConversationSummary, Entropy, HistoryTurn, IncidentData, LabelDetail,
    Lexicon, ReportSynthesizer, SeededEntropy, SystemEntropy,
};

#[derive(Parser)]
#[command(name = "safewalk", version, about = "Incident triage, safety coaching and FIR drafting")]
struct Cli {
    /// Load lexicon tables from a YAML or JSON file instead of the built-in ones
    #[arg(long, global = true, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one message
    Analyze {
        /// The message text
        text: String,

        #[arg(long)]
        night: bool,

        #[arg(long)]
        isolated: bool,

        /// The sender shared a location fix
        #[arg(long)]
        location: bool,

        #[arg(long)]
        witness: bool,

        /// Include the tier's briefing block and evidence label details
        #[arg(long)]
        briefing: bool,
    },

    /// Aggregate a conversation from a JSON array of `{text, context}` ("-" for stdin)
    Conversation { input: String },

    /// Ask the safety coach a question
    Chat {
        question: String,

        /// JSON array of earlier `{message, topic}` turns
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,

        /// Seed phrase selection and ids for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print an opening greeting
    Greet {
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draft an FIR from incident JSON ("-" for stdin)
    Fir {
        input: String,

        /// Print the plain-text document instead of JSON
        #[arg(long)]
        render: bool,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Dump the active lexicon tables
    Lexicon {
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    analysis: &'a AnalysisResult,
    briefing: &'static str,
    evidence: Vec<LabelDetail>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatOutput {
    #[serde(flatten)]
    response: CoachResponse,
    conversation: ConversationSummary,
    needs_follow_up: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = match &cli.lexicon {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::builtin(),
    };

    match cli.command {
        Command::Analyze {
            text,
            night,
            isolated,
            location,
            witness,
            briefing,
        } => {
            let context = Context {
                is_night: night,
                is_isolated: isolated,
                has_location: location,
                has_witness: witness,
            };
            let result = analyze_with_lexicon(&lexicon, &text, Some(context))?;
            if briefing {
                print_json(&AnalyzeOutput {
                    analysis: &result,
                    briefing: result.severity.briefing(),
                    evidence: label_details(&result.evidence_labels),
                })?;
            } else {
                print_json(&result)?;
            }
        }

        Command::Conversation { input } => {
            let messages: Vec<ConversationMessage> = serde_json::from_str(&read_input(&input)?)
                .context("Conversation input must be a JSON array of messages")?;
            let result = ConversationAggregator::new(&lexicon).aggregate(&messages)?;
            print_json(&result)?;
        }

        Command::Chat {
            question,
            history,
            seed,
        } => {
            let history: Vec<HistoryTurn> = match history {
                Some(path) => serde_json::from_str(&read_file(&path)?)
                    .with_context(|| format!("Invalid history in {}", path.display()))?,
                None => Vec::new(),
            };
            let mut entropy = entropy(seed);
            let response = Coach::new(&lexicon).respond(&question, &history, entropy.as_mut())?;
            print_json(&ChatOutput {
                response,
                conversation: summarize_history(&history),
                needs_follow_up: needs_follow_up(&question),
            })?;
        }

        Command::Greet { seed } => {
            let mut entropy = entropy(seed);
            println!("{}", greeting(&lexicon, entropy.as_mut())?);
        }

        Command::Fir {
            input,
            render,
            seed,
        } => {
            let data = IncidentData::from_json(&read_input(&input)?)?;
            let mut entropy = entropy(seed);
            let record = ReportSynthesizer::new(&lexicon).synthesize(&data, entropy.as_mut())?;
            if render {
                print!("{}", render_report(&record));
            } else {
                print_json(&record)?;
            }
        }

        Command::Lexicon { format } => match format {
            Format::Yaml => print!("{}", lexicon.to_yaml()?),
            Format::Json => print_json(&lexicon)?,
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let lexicon = if is_json {
        Lexicon::from_json_file(path)
    } else {
        Lexicon::from_yaml_file(path)
    };
    let lexicon =
        lexicon.with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
    tracing::info!(path = %path.display(), topics = lexicon.topics.len(), "lexicon loaded");
    Ok(lexicon)
}

fn entropy(seed: Option<u64>) -> Box<dyn Entropy> {
    match seed {
        Some(seed) => Box::new(SeededEntropy::new(seed)),
        None => Box::new(SystemEntropy::new()),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        if buffer.trim().is_empty() {
            bail!("No input on stdin");
        }
        return Ok(buffer);
    }
    read_file(Path::new(input))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
