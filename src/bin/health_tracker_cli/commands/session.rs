// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Interactive REPL session for health-tracker
// ABOUTME: Reads panel commands from stdin and asks before an unconfirmed reset

use crate::helpers::display::{print_error, print_help, print_output, print_welcome};
use anyhow::Result;
use health_tracker_panel::config::PanelConfig;
use health_tracker_panel::panel::{Command, HealthPanel};
use std::io::{self, BufRead, Write};
use tracing::info;

const PROMPT: &str = "health> ";

fn prompt(message: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{message}")?;
    stdout.flush()?;
    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Turn an unconfirmed `reset-all` into a confirmed or declined one
///
/// `ask` is only called for an unconfirmed reset; end of input counts as "no".
fn confirm_reset<F>(command: Command, ask: F) -> Result<Command>
where
    F: FnOnce() -> Result<Option<String>>,
{
    if command != (Command::ResetAll { confirmed: false }) {
        return Ok(command);
    }
    let answer = ask()?.unwrap_or_default();
    Ok(Command::ResetAll {
        confirmed: is_yes(&answer),
    })
}

/// Run the REPL until `quit`, `exit`, or end of input
pub fn interactive(config: PanelConfig) -> Result<()> {
    let format = config.output_format;
    let mut panel = HealthPanel::new(config);
    info!(session_id = %panel.session_id(), "Interactive session started");

    print_welcome();
    print_output(&panel.execute(Command::Snapshot), format)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(PROMPT)?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                print_error(&error, format)?;
                continue;
            }
        };

        let command = confirm_reset(command, || {
            prompt("Reset all data to defaults? [y/N] ")?;
            Ok(lines.next().transpose()?)
        })?;

        print_output(&panel.execute(command), format)?;
    }

    info!(session_id = %panel.session_id(), "Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn answered(answer: &'static str) -> impl FnOnce() -> Result<Option<String>> {
        move || Ok(Some(answer.to_owned()))
    }

    #[test]
    fn test_unconfirmed_reset_follows_answer() {
        let unconfirmed = Command::ResetAll { confirmed: false };
        for answer in ["y", "YES", " yes \n"] {
            assert_eq!(
                confirm_reset(unconfirmed.clone(), answered(answer)).unwrap(),
                Command::ResetAll { confirmed: true },
                "{answer:?}"
            );
        }
        for answer in ["", "n", "no", "yep"] {
            assert_eq!(
                confirm_reset(unconfirmed.clone(), answered(answer)).unwrap(),
                unconfirmed,
                "{answer:?}"
            );
        }
    }

    #[test]
    fn test_end_of_input_declines_reset() {
        let command = confirm_reset(Command::ResetAll { confirmed: false }, || Ok(None)).unwrap();
        assert_eq!(command, Command::ResetAll { confirmed: false });
    }

    #[test]
    fn test_other_commands_are_not_prompted() {
        let never_asked = || -> Result<Option<String>> { panic!("prompted for a non-reset command") };
        assert_eq!(
            confirm_reset(Command::TrackWater, never_asked).unwrap(),
            Command::TrackWater
        );
        let confirmed = Command::ResetAll { confirmed: true };
        assert_eq!(
            confirm_reset(confirmed.clone(), || panic!("already confirmed")).unwrap(),
            confirmed
        );
    }
}
