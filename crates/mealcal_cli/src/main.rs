//! Meal planner command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and optional logging settings.
//! - Dispatch to one-shot calendar rendering or the interactive planner.

mod render;
mod repl;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mealcal_core::{
    default_log_level, init_logging_with, LoggingConfig, PlannerService, PlannerStore,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Years offered by the month selector.
pub const FIRST_YEAR: i32 = 2024;
pub const LAST_YEAR: i32 = 2028;

#[derive(Parser)]
#[command(name = "mealcal", version)]
#[command(about = "Plan breakfast, lunch, snacks and dinner on a month calendar")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "MEALCAL_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "MEALCAL_LOG_DIR", value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the grid of one month
    Calendar {
        /// Year to show (2024-2028)
        #[arg(long, default_value_t = FIRST_YEAR, value_parser = year_in_range)]
        year: i32,
        /// Month to show (1-12)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Start an interactive planner session (state is kept in memory only)
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir
            .to_str()
            .ok_or_else(|| anyhow!("log dir must be valid UTF-8"))?;
        let config = LoggingConfig::parse(level, dir).map_err(|err| anyhow!(err))?;
        init_logging_with(config).map_err(|err| anyhow!(err))?;
    }

    match cli.command {
        Command::Calendar { year, month } => {
            let planner = PlannerService::new(PlannerStore::new());
            let view = planner
                .month_view(year, month)
                .with_context(|| format!("cannot lay out {month}/{year}"))?;
            print!("{}", render::month(&view));
        }
        Command::Session => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(stdin.lock(), stdout.lock())?;
        }
    }
    Ok(())
}

fn year_in_range(value: &str) -> Result<i32, String> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a year"))?;
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(format!("year must be within {FIRST_YEAR}..={LAST_YEAR}"))
    }
}

fn run_session(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut session = repl::Session::new()?;
    writeln!(output, "Meal Planner Calendar (type `help` for commands)")?;
    write!(output, "{}", session.overview()?)?;
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match session.handle_line(&line) {
            repl::Outcome::Print(text) => write!(output, "{text}")?,
            repl::Outcome::Quit => break,
        }
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_session, year_in_range};

    #[test]
    fn session_reads_commands_until_quit() {
        let input: &[u8] = b"date 3\nset lunch Soup\nsave\nquit\nset dinner Ignored\n";
        let mut output = Vec::new();

        run_session(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Meal Planner Calendar"));
        assert!(text.contains("[ok] Meal Plan for 1/3/2024 has been saved."));
        assert!(text.contains("Lunch: Soup"));
        assert!(!text.contains("Dinner staged"));
    }

    #[test]
    fn year_outside_selector_range_is_rejected() {
        assert_eq!(year_in_range("2024").unwrap(), 2024);
        assert_eq!(year_in_range(" 2028 ").unwrap(), 2028);
        assert!(year_in_range("2030").unwrap_err().contains("2024..=2028"));
        assert!(year_in_range("2023").is_err());
        assert!(year_in_range("soon").is_err());
    }
}
