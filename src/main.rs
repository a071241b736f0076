//! Termpick CLI - interactive prompts for shell scripts
//!
//! Usage: termpick <COMMAND>
//!
//! Commands:
//!   tree  Browse a directory tree and pick files or directories
//!   sort  Reorder a list of items

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use termpick::terminal::detect_capabilities;
use termpick::UiContext;

use crate::cli::{Cli, Commands};

/// Exit status for a cancelled prompt, as for SIGINT.
const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let guard = logging::init(cli.log);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    };

    if let Some(guard) = &guard {
        eprintln!("Log: {}", guard.log_dir().display());
    }
    code
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (config, warnings) = termpick::config::load_or_default(cli.config.as_deref())?;
    for w in &warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(s) => eprintln!(
                "Warning: unknown config key '{}' at {location} (did you mean '{s}'?)",
                w.key
            ),
            None => eprintln!("Warning: unknown config key '{}' at {location}", w.key),
        }
    }

    let caps = detect_capabilities();
    let ui = UiContext::from_caps(cli.color.map(Into::into), cli.ascii, &config, caps);
    commands::install_interrupt_handler(caps.input_is_tty)?;
    let mut term = commands::open_terminal(&ui, caps.input_is_tty);

    let answer = match cli.command {
        Commands::Tree(args) => commands::tree::cmd_tree(args, &config, &ui, term.as_mut())?,
        Commands::Sort(args) => commands::sort::cmd_sort(args, &ui, term.as_mut())?,
    };

    commands::print_answer(&answer, cli.json)?;
    Ok(if answer.cancelled {
        ExitCode::from(EXIT_CANCELLED)
    } else {
        ExitCode::SUCCESS
    })
}
