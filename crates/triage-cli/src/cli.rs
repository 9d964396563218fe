//! CLI argument definitions for the triage engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Symptom triage engine - canonicalize disease knowledge and run clarification dialogues",
    long_about = "Canonicalize a raw disease knowledge base into a stable symptom index,\n\
                  then run interactive clarification dialogues that converge toward a\n\
                  diagnosis or an explicit insufficient-evidence outcome."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize a raw knowledge base and build the reverse symptom index.
    Build(BuildArgs),

    /// Run an interactive clarification dialogue against a built knowledge base.
    Chat(ChatArgs),

    /// List the semantic symptom groups known to the lexicon.
    Symptoms,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the raw knowledge base JSON file.
    #[arg(value_name = "RAW_KB")]
    pub input: PathBuf,

    /// Output directory for generated files (default: directory of RAW_KB).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Canonicalize and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of top symptoms shown in the frequency summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,
}

#[derive(Parser)]
pub struct ChatArgs {
    /// Path to a built knowledge base JSON file.
    #[arg(value_name = "KB")]
    pub kb: PathBuf,

    /// Patient identifier recorded on the session profile.
    #[arg(long = "patient-id", default_value = "patient_0001")]
    pub patient_id: String,

    /// Clarification rounds before the session reports inconclusive.
    #[arg(long = "max-rounds", value_name = "N", default_value_t = 5)]
    pub max_rounds: usize,

    /// Emit one JSON object per turn instead of formatted text.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
