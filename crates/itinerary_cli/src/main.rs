//! Itinerary CLI entry point.
//!
//! # Responsibility
//! - Stand in for the rendering layer: load raw itinerary text, drive the
//!   editor through scripted commands and print the resulting tree.
//! - Wire CLI configuration into core logging and parse options.

mod args;
mod cli;
mod script;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use itinerary_core::{
    default_log_level, init_logging, ItinerarySession, LogTarget, NonNumericDayPolicy,
    ParseOptions, RandomIdGenerator, SequentialIdGenerator,
};
use log::info;

// Stderr is shared with user-facing notes, so it only gets warnings by default.
const STDERR_DEFAULT_LEVEL: &str = "warn";

fn main() -> Result<()> {
    let Args {
        log_level,
        log_dir,
        reject_non_numeric,
        sequential_ids,
        format,
        command,
    } = Args::parse();

    init_cli_logging(log_level.as_deref(), log_dir.as_deref())?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        itinerary_core::core_version()
    );

    let options = ParseOptions {
        non_numeric_day: if reject_non_numeric {
            NonNumericDayPolicy::Reject
        } else {
            NonNumericDayPolicy::Sentinel
        },
    };

    if sequential_ids {
        let session = ItinerarySession::with_generator(SequentialIdGenerator::new(), options);
        Cli::new(session, format).handle(command)
    } else {
        let session = ItinerarySession::with_generator(RandomIdGenerator, options);
        Cli::new(session, format).handle(command)
    }
}

fn init_cli_logging(level: Option<&str>, log_dir: Option<&str>) -> Result<()> {
    let (target, default_level) = match log_dir {
        Some(dir) => (
            LogTarget::directory(dir).map_err(anyhow::Error::msg)?,
            default_log_level(),
        ),
        None => (LogTarget::Stderr, STDERR_DEFAULT_LEVEL),
    };
    init_logging(level.unwrap_or(default_level), target)
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")
}
