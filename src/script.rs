//! Gesture scripts: a plain-text recording of pointer events and toolbar
//! commands that can be replayed against an [`InputState`].
//!
//! One step per line:
//!
//! ```text
//! # draw a locked square
//! rectangle
//! press 10 10
//! drag 30 20 lock
//! release
//! undo
//! ```
//!
//! Blank lines and `#` comments are skipped. Any word other than `press`,
//! `drag` and `release` is passed to [`InputState::handle_command`].

use crate::input::InputState;
use anyhow::{Context, Result, anyhow, bail};
use log::warn;
use std::str::FromStr;

/// A single replayable event.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Press { x: f64, y: f64 },
    Drag { x: f64, y: f64, aspect_lock: bool },
    Release,
    Command(String),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            bail!("Empty step");
        };
        let args: Vec<&str> = words.collect();

        let step = match (head, args.as_slice()) {
            ("press", [x, y]) => Step::Press {
                x: parse_coord(x)?,
                y: parse_coord(y)?,
            },
            ("drag", [x, y]) => Step::Drag {
                x: parse_coord(x)?,
                y: parse_coord(y)?,
                aspect_lock: false,
            },
            ("drag", [x, y, "lock"]) => Step::Drag {
                x: parse_coord(x)?,
                y: parse_coord(y)?,
                aspect_lock: true,
            },
            ("release", []) => Step::Release,
            ("press" | "drag" | "release", _) => {
                bail!("Malformed '{head}' step: {}", s.trim())
            }
            (command, []) => Step::Command(command.to_string()),
            (command, _) => bail!("Command '{command}' takes no arguments"),
        };
        Ok(step)
    }
}

fn parse_coord(word: &str) -> Result<f64> {
    word.parse::<f64>()
        .map_err(|_| anyhow!("Invalid coordinate '{word}'"))
}

/// Parses a whole script, reporting the first bad line by number.
pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
        .map(|(number, line)| {
            line.parse::<Step>()
                .with_context(|| format!("Invalid script line {number}"))
        })
        .collect()
}

/// Feeds every step to `state`, returning how many commands were rejected.
pub fn replay(state: &mut InputState, steps: &[Step]) -> usize {
    let mut rejected = 0;
    for step in steps {
        match step {
            Step::Press { x, y } => state.on_pointer_press(*x, *y),
            Step::Drag { x, y, aspect_lock } => state.on_pointer_drag(*x, *y, *aspect_lock),
            Step::Release => state.on_pointer_release(),
            Step::Command(name) => {
                if state.handle_command(name).is_err() {
                    rejected += 1;
                }
            }
        }
    }

    if rejected > 0 {
        warn!("{rejected} script command(s) were not recognized");
    }
    rejected
}
