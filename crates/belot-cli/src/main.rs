use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use belot_cli::capture;
use belot_cli::clipboard::{FileClipboard, WaitPolicy};
use belot_cli::config::BelotConfig;
use belot_cli::logging::init_logging;
use belot_cli::page::FilePage;
use belot_cli::pipeline::{Pipeline, PipelineOutcome};
use belot_cli::sink::{ConsoleSink, JsonFileSink, SinkSet};
use belot_core::game::compose::RoundInputs;
use belot_core::game::session::ScoringSession;
use belot_core::model::card::Card;
use belot_core::report;

const DEFAULT_CONFIG: &str = "belot.yaml";

/// Score reader for online Belot tables.
#[derive(Debug, Parser)]
#[command(
    name = "belot",
    author,
    version,
    about = "Reads calculator output and table labels into a final Belot score"
)]
struct Cli {
    /// Path to the YAML configuration file (defaults to ./belot.yaml when present).
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exit after loading and validating the configuration.
    #[arg(long, global = true)]
    validate_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one round from explicit inputs.
    Score {
        /// Calculator report file, or '-' to read it from stdin.
        #[arg(long, value_name = "FILE")]
        report: PathBuf,

        /// Trump label ("Cozul: Dobă") or just the suit name.
        #[arg(long, value_name = "LABEL")]
        trump: String,

        /// Combinations label as shown on the table.
        #[arg(long, value_name = "TEXT", default_value = "")]
        combinations: String,

        /// Print the result snapshot as JSON instead of the score card.
        #[arg(long)]
        json: bool,
    },

    /// Render the calculator report for a list of collected cards.
    Report {
        /// Card codes such as "J♦ 9♦ 10♠".
        #[arg(long, value_name = "CODES")]
        cards: String,

        /// Write the report to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Run one trigger: capture, wait for the report, score and show it.
    Watch {
        /// Override the run identifier (substitutes {run_id} templates).
        #[arg(long, value_name = "RUN_ID")]
        run_id: Option<String>,

        /// Override the clipboard wait ceiling.
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BelotConfig> {
    match path {
        Some(path) => Ok(BelotConfig::from_path(path)?),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(BelotConfig::from_path(DEFAULT_CONFIG)?),
        None => Ok(BelotConfig::fallback()),
    }
}

fn read_report(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading report from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading report {}", path.display()))
}

fn trump_label(value: &str) -> String {
    if value.contains("Cozul:") {
        value.to_string()
    } else {
        format!("Cozul: {}", value.trim())
    }
}

fn print_loaded(config: &BelotConfig) {
    println!(
        "Loaded configuration '{}' (clipboard {}, timeout {} ms)",
        config.run_id,
        config.clipboard.path.display(),
        config.clipboard.timeout_ms
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    if let Command::Watch { run_id, timeout_ms } = &cli.command {
        if let Some(run_id) = run_id {
            config.run_id = run_id.clone();
        }
        if let Some(timeout_ms) = timeout_ms {
            config.clipboard.timeout_ms = *timeout_ms;
        }
    }
    config.validate()?;

    if cli.validate_only {
        print_loaded(&config);
        println!("Validation-only mode: pipeline execution skipped.");
        return Ok(());
    }

    let outputs = config.resolved_outputs();
    let _logging_guard = init_logging(&config.logging, &outputs, &config.run_id)?;

    match cli.command {
        Command::Score {
            report,
            trump,
            combinations,
            json,
        } => {
            let inputs = RoundInputs {
                report: read_report(&report)?,
                trump_label: trump_label(&trump),
                combinations,
            };
            let mut session = ScoringSession::begin(1);
            let Some(snapshot) = session.evaluate(&inputs).cloned() else {
                bail!("could not determine trump suit from '{trump}'");
            };
            if json {
                println!("{}", snapshot.to_json()?);
            } else {
                session.present(&mut ConsoleSink::new(io::stdout()))?;
            }
        }
        Command::Report { cards, out } => {
            let cards = Card::parse_list(&cards)?;
            let text = report::render(&cards);
            match out {
                Some(path) => {
                    fs::write(&path, &text)
                        .with_context(|| format!("writing report {}", path.display()))?;
                    println!("Report for {} cards written to {}", cards.len(), path.display());
                }
                None => print!("{text}"),
            }
        }
        Command::Watch { .. } => {
            print_loaded(&config);

            let sinks = SinkSet::new()
                .with(ConsoleSink::new(io::stdout()))
                .with(JsonFileSink::new(&outputs.result_json));
            let mut pipeline = Pipeline::new(
                capture::from_config(&config.capture),
                Box::new(FileClipboard::new(&config.clipboard.path)),
                Box::new(FilePage::from_config(&config.page)),
                sinks,
                WaitPolicy::from_config(&config.clipboard),
            );

            match pipeline.trigger()? {
                PipelineOutcome::Presented(_) => {
                    println!("Result saved to {}", outputs.result_json.display());
                }
                PipelineOutcome::NotReady => {
                    println!("Trump suit not available yet; nothing shown.");
                }
                PipelineOutcome::TimedOut => {
                    println!("Clipboard monitoring timed out.");
                }
                PipelineOutcome::Canceled => {
                    println!("Clipboard monitoring canceled.");
                }
            }
        }
    }

    Ok(())
}
