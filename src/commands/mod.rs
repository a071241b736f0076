pub mod sort;
pub mod tree;

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use termpick::terminal::{CrosstermTerminal, StreamTerminal, Terminal};
use termpick::widgets::tree::NodeInfo;
use termpick::UiContext;

/// What a command prints once its prompt has finished.
#[derive(Debug, Serialize)]
pub struct Answer {
    pub value: serde_json::Value,
    pub cancelled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeInfo>,
    #[serde(skip)]
    pub lines: Vec<String>,
}

impl Answer {
    pub fn cancelled() -> Self {
        Self {
            value: serde_json::Value::Null,
            cancelled: true,
            node: None,
            lines: Vec::new(),
        }
    }

    pub fn one(value: String, node: Option<NodeInfo>) -> Self {
        Self {
            value: serde_json::Value::String(value.clone()),
            cancelled: false,
            node,
            lines: vec![value],
        }
    }

    pub fn many(values: Vec<String>) -> Self {
        Self {
            value: serde_json::Value::from(values.clone()),
            cancelled: false,
            node: None,
            lines: values,
        }
    }
}

/// Print to stdout: one value per line, or a single JSON object.
pub fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer(&mut out, answer)?;
        writeln!(out)?;
    } else {
        for line in &answer.lines {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// The real TTY when stdin is one, else keys decoded from piped stdin.
pub fn open_terminal(ui: &UiContext, input_is_tty: bool) -> Box<dyn Terminal> {
    if input_is_tty {
        Box::new(CrosstermTerminal::new())
    } else {
        tracing::debug!("stdin is not a terminal, reading scripted keys");
        Box::new(
            StreamTerminal::new(io::stdin(), io::stderr()).with_escape_timeout(ui.escape_timeout),
        )
    }
}

/// Put the terminal back and exit 130 on an external SIGINT.
pub fn install_interrupt_handler(tty: bool) -> Result<()> {
    ctrlc::set_handler(move || {
        if tty {
            let _ = crossterm::terminal::disable_raw_mode();
        }
        let _ = crossterm::execute!(io::stderr(), crossterm::cursor::Show);
        std::process::exit(130);
    })
    .context("failed to install Ctrl+C handler")
}
