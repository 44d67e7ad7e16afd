//! Command handlers.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use itinerary_core::{to_day_blocks, IdGenerator, ItinerarySession};
use log::info;

use crate::args::{Commands, OutputFormat};
use crate::script::{parse_script, run_script};

pub struct Cli<G: IdGenerator> {
    session: ItinerarySession<G>,
    format: OutputFormat,
}

impl<G: IdGenerator> Cli<G> {
    pub fn new(session: ItinerarySession<G>, format: OutputFormat) -> Self {
        Self { session, format }
    }

    pub fn handle(mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Parse { input } => {
                let text = read_input(&input)?;
                self.session.load_text(&text);
            }
            Commands::Edit { input, script } => {
                // Validate the script before touching the itinerary so a bad
                // script never produces partial output.
                let source = std::fs::read_to_string(&script)
                    .with_context(|| format!("failed to read edit script `{}`", script.display()))?;
                let steps = parse_script(&source)
                    .with_context(|| format!("invalid edit script `{}`", script.display()))?;

                let text = read_input(&input)?;
                self.session.load_text(&text);
                info!(
                    "event=script_replay module=cli status=started steps={}",
                    steps.len()
                );
                run_script(&mut self.session, steps);
            }
        }
        self.print()
    }

    fn print(&self) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                print!("{}", to_day_blocks(self.session.itinerary()));
                if let Some(target) = self.session.edit_state().target() {
                    eprintln!(
                        "note: activity {} of day {} is still being edited; draft not committed",
                        target.activity_position, target.day_position
                    );
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&self.session.snapshot())
                    .context("failed to serialize itinerary")?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read itinerary from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read itinerary `{}`", path.display()))
}
