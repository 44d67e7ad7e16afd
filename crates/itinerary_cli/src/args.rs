use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Parse and edit day-block itineraries.
///
/// Input text uses `**Day <N>: <Title>**` header lines followed by one
/// activity per line. Pass `-` as the input path to read from stdin.
#[derive(Parser, Debug)]
#[command(version, about, name = "itinerary")]
pub struct Args {
    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "ITINERARY_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset
    #[arg(long, env = "ITINERARY_LOG_DIR", global = true)]
    pub log_dir: Option<String>,

    /// Drop day blocks whose day number is not an integer instead of keeping
    /// them with day number -1
    #[arg(long, global = true)]
    pub reject_non_numeric: bool,

    /// Use deterministic ids (00000000-0000-0000-0000-000000000001, ...)
    #[arg(long, global = true)]
    pub sequential_ids: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse an itinerary and print the result
    Parse {
        /// Itinerary text file, or `-` for stdin
        input: PathBuf,
    },
    /// Parse an itinerary, replay an edit script on it and print the result
    Edit {
        /// Itinerary text file, or `-` for stdin
        input: PathBuf,

        /// Edit script, one command per line
        #[arg(long, short)]
        script: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Day-block text
    Text,
    /// Pretty-printed JSON snapshot with ids and editing state
    Json,
}
