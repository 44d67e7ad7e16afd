//! Line-oriented edit scripts.
//!
//! # Grammar
//! One command per line; blank lines and lines starting with `#` are skipped.
//! Positions are zero-based.
//!
//! ```text
//! select <day> <activity>
//! draft <text...>
//! commit
//! delete
//! add <day> <text...>
//! pending <day> <text...>
//! submit <day>
//! move-day <from> <to>
//! move-activity <day> <from> <to>
//! ```
//!
//! Only malformed lines are errors. Commands that point at missing days or
//! activities are handed to the session, which ignores them.

use itinerary_core::{Command, IdGenerator, ItinerarySession, SequenceKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Forwarded to the session as-is.
    Editor(Command),
    SetPending { day_position: usize, text: String },
    SubmitPending { day_position: usize },
    /// Day is named by position here and resolved to its id when replayed.
    MoveActivity {
        day_position: usize,
        from_index: usize,
        to_index: usize,
    },
}

/// Malformed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownCommand { line: usize, command: String },
    MissingArgument { line: usize, argument: &'static str },
    InvalidPosition { line: usize, value: String },
    UnexpectedArgument { line: usize, value: String },
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { line, command } => {
                write!(f, "line {line}: unknown command `{command}`")
            }
            Self::MissingArgument { line, argument } => {
                write!(f, "line {line}: missing argument <{argument}>")
            }
            Self::InvalidPosition { line, value } => {
                write!(f, "line {line}: `{value}` is not a position")
            }
            Self::UnexpectedArgument { line, value } => {
                write!(f, "line {line}: unexpected argument `{value}`")
            }
        }
    }
}

impl Error for ScriptError {}

/// Parses a whole script, stopping at the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let trimmed = raw.trim_start();
        if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
            continue;
        }
        steps.push(parse_line(index + 1, trimmed)?);
    }
    Ok(steps)
}

/// Replays `steps` against `session` in order.
pub fn run_script<G: IdGenerator>(session: &mut ItinerarySession<G>, steps: Vec<ScriptStep>) {
    for step in steps {
        match step {
            ScriptStep::Editor(command) => session.apply(command),
            ScriptStep::SetPending { day_position, text } => {
                session.set_pending_input(day_position, text)
            }
            ScriptStep::SubmitPending { day_position } => {
                session.submit_pending_input(day_position)
            }
            ScriptStep::MoveActivity {
                day_position,
                from_index,
                to_index,
            } => {
                let container = session.itinerary().day(day_position).map(|day| day.id);
                session.apply(Command::Move {
                    kind: SequenceKind::Activities,
                    container,
                    from_index,
                    to_index: Some(to_index),
                });
            }
        }
    }
}

fn parse_line(line: usize, text: &str) -> Result<ScriptStep, ScriptError> {
    let (command, rest) = split_word(text);
    let mut args = LineArgs { line, rest };

    let step = match command {
        "select" => ScriptStep::Editor(Command::Select {
            day_position: args.position("day")?,
            activity_position: args.position("activity")?,
        }),
        "draft" => ScriptStep::Editor(Command::UpdateDraft {
            text: args.text(),
        }),
        "commit" => ScriptStep::Editor(Command::Commit),
        "delete" => ScriptStep::Editor(Command::Delete),
        "add" => ScriptStep::Editor(Command::AddActivity {
            day_position: args.position("day")?,
            text: args.text(),
        }),
        "pending" => ScriptStep::SetPending {
            day_position: args.position("day")?,
            text: args.text(),
        },
        "submit" => ScriptStep::SubmitPending {
            day_position: args.position("day")?,
        },
        "move-day" => ScriptStep::Editor(Command::Move {
            kind: SequenceKind::Days,
            container: None,
            from_index: args.position("from")?,
            to_index: Some(args.position("to")?),
        }),
        "move-activity" => ScriptStep::MoveActivity {
            day_position: args.position("day")?,
            from_index: args.position("from")?,
            to_index: args.position("to")?,
        },
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };

    args.finish()?;
    Ok(step)
}

/// Remaining arguments of one line.
struct LineArgs<'a> {
    line: usize,
    rest: &'a str,
}

impl LineArgs<'_> {
    fn position(&mut self, argument: &'static str) -> Result<usize, ScriptError> {
        let (word, rest) = split_word(self.rest);
        if word.is_empty() {
            return Err(ScriptError::MissingArgument {
                line: self.line,
                argument,
            });
        }
        let value = word.parse().map_err(|_| ScriptError::InvalidPosition {
            line: self.line,
            value: word.to_string(),
        })?;
        self.rest = rest;
        Ok(value)
    }

    /// Takes the rest of the line; trailing whitespace is kept.
    fn text(&mut self) -> String {
        std::mem::take(&mut self.rest).to_string()
    }

    fn finish(self) -> Result<(), ScriptError> {
        let leftover = self.rest.trim();
        if leftover.is_empty() {
            return Ok(());
        }
        Err(ScriptError::UnexpectedArgument {
            line: self.line,
            value: leftover.to_string(),
        })
    }
}

/// Splits off the first whitespace-delimited word and the text after the
/// single separator that follows it.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => {
            let (word, rest) = text.split_at(end);
            let mut chars = rest.chars();
            chars.next();
            (word, chars.as_str())
        }
        None => (text, ""),
    }
}
