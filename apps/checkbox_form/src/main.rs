use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

mod config;
mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use selection::SelectionStore;
use shared::{error::FormError, protocol::FormEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{load_settings, DEFAULT_CONFIG_PATH};
use controller::{
    events::{parse_command, UiCommand, HELP},
    orchestration::{dispatch_action, render_state},
};
use ui::{render_event, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "checkbox-form", about = "Interactive multi-checkbox selection form")]
struct Args {
    /// Option label to offer; repeat to configure several.
    #[arg(long = "option", value_name = "LABEL")]
    options: Vec<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Emit form events as JSON lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config, &args.options)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(options = ?settings.options, "checkbox form ready");
    let mut store = SelectionStore::new(&settings.options);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, stdin.lock(), &mut stdout.lock(), format)
}

/// Drives one form session until `quit` or end of input.
fn run_session<R: BufRead, W: Write>(
    store: &mut SelectionStore,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    render_event(out, &render_state(store), format)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!(bytes = buf.len(), "discarding input line that is not UTF-8");
            let err = FormError::validation("input line is not valid UTF-8");
            render_event(out, &FormEvent::Error(err), format)?;
            continue;
        };

        let event = match parse_command(line) {
            Ok(None) => continue,
            Ok(Some(UiCommand::Quit)) => break,
            Ok(Some(UiCommand::Show)) => render_state(store),
            Ok(Some(UiCommand::Help)) => {
                if format == OutputFormat::Text {
                    writeln!(out, "{HELP}")?;
                }
                continue;
            }
            Ok(Some(UiCommand::Action(action))) => dispatch_action(store, action),
            Err(err) => FormEvent::Error(err),
        };
        render_event(out, &event, format)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
