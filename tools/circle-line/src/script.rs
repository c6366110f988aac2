//! Line-oriented command scripts.
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! board Ana C
//! move 2
//! state
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::console::MetroConsole;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send the train back to the first station and empty it
    Reset,

    /// Board a passenger at the current station
    Board { name: String, destination: String },

    /// Force a passenger off the train
    Remove { name: String, station: String },

    /// Advance the train, letting off arriving passengers at each stop
    Move {
        #[arg(default_value_t = 1)]
        count: usize,
    },

    /// Print the current station and who is aboard
    State,

    /// Stop reading commands
    Quit,
}

/// Parse a single script line. `Ok(None)` means there was nothing to run.
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    Line::try_parse_from(line.split_whitespace()).map(|l| Some(l.command))
}

/// Options that change how commands are echoed
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Also print `state` snapshots as JSON
    pub json_state: bool,
}

/// Outcome of running a script
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub rejected: usize,
}

/// Run every command from `input` against the console until EOF or `quit`.
///
/// Lines that fail to parse are reported on the console output and skipped.
pub fn run<R: BufRead, W: Write>(
    console: &mut MetroConsole<W>,
    input: R,
    options: RunOptions,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (lineno, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read command line {}", lineno + 1))?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(line = lineno + 1, error = %e, "unparseable command");
                console.say(format_args!("Unrecognized command: {}", line.trim()))?;
                summary.rejected += 1;
                continue;
            }
        };

        if command == Command::Quit {
            tracing::debug!(line = lineno + 1, "quit requested");
            break;
        }

        execute(console, command, options)?;
        summary.executed += 1;
    }

    tracing::info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "script finished"
    );
    Ok(summary)
}

fn execute<W: Write>(console: &mut MetroConsole<W>, command: Command, options: RunOptions) -> Result<()> {
    match command {
        Command::Reset => console.reset_state()?,
        Command::Board { name, destination } => console.add_passenger(&name, &destination)?,
        Command::Remove { name, station } => console.remove_passenger(&name, &station)?,
        Command::Move { count } => {
            for _ in 0..count {
                console.move_train()?;
            }
        }
        Command::State => {
            let state = console.get_state()?;
            if options.json_state {
                let json = serde_json::to_string(&state).context("Failed to serialize state")?;
                console.say(format_args!("{}", json))?;
            }
        }
        Command::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_line_transit::LineConfig;

    fn run_script(script: &str, options: RunOptions) -> (RunSummary, String, MetroConsole<Vec<u8>>) {
        let mut console = MetroConsole::new(LineConfig::default().build().unwrap(), Vec::new());
        let summary = run(&mut console, script.as_bytes(), options).unwrap();
        let metro = console.metro().clone();
        let out = String::from_utf8(console.into_inner()).unwrap();
        (summary, out, MetroConsole::new(metro, Vec::new()))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("reset").unwrap(), Some(Command::Reset));
        assert_eq!(
            parse_line("board Ana C").unwrap(),
            Some(Command::Board { name: "Ana".into(), destination: "C".into() })
        );
        assert_eq!(
            parse_line("  remove Carlos D ").unwrap(),
            Some(Command::Remove { name: "Carlos".into(), station: "D".into() })
        );
        assert_eq!(parse_line("move").unwrap(), Some(Command::Move { count: 1 }));
        assert_eq!(parse_line("move 3").unwrap(), Some(Command::Move { count: 3 }));
        assert_eq!(parse_line("state").unwrap(), Some(Command::State));
        assert_eq!(parse_line("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# board Ana C").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_line("fly").is_err());
        assert!(parse_line("board Ana").is_err());
        assert!(parse_line("move many").is_err());
        assert!(parse_line("state now").is_err());
    }

    #[test]
    fn test_run_scenario() {
        let script = "\
            # two riders, two stops\n\
            board Ana A\n\
            board Luis C\n\
            move 2\n\
            state\n";

        let (summary, out, console) = run_script(script, RunOptions::default());

        assert_eq!(summary, RunSummary { executed: 4, rejected: 0 });
        assert!(out.contains("Luis gets off at C."));
        assert!(out.contains("Current station: C"));
        assert!(out.contains("Passengers on board: Ana"));
        assert_eq!(console.metro().current_station(), "C");
    }

    #[test]
    fn test_run_reports_bad_lines_and_continues() {
        let script = "board Juan X\njump\nboard Ana B\nmove\n";

        let (summary, out, console) = run_script(script, RunOptions::default());

        assert_eq!(summary, RunSummary { executed: 3, rejected: 1 });
        assert!(out.contains("Error adding passenger"));
        assert!(out.contains("Unrecognized command: jump"));
        assert!(out.contains("Ana gets off at B."));
        assert!(console.metro().passengers().is_empty());
    }

    #[test]
    fn test_run_stops_at_quit() {
        let script = "board Ana C\nquit\nmove 2\n";

        let (summary, out, console) = run_script(script, RunOptions::default());

        assert_eq!(summary.executed, 1);
        assert!(!out.contains("Train moves"));
        assert_eq!(console.metro().current_station(), "A");
    }

    #[test]
    fn test_run_json_state() {
        let script = "board Ana C\nstate\n";

        let (_, out, _) = run_script(script, RunOptions { json_state: true });

        assert!(out.contains(r#"{"position":"A","passengers":["Ana"]}"#));
    }
}
