//! puzzlefmt binary.
//!
//! Reads pasted puzzle results and prints them as one normalized block:
//! - interactively, one paste at a time, when stdin is a terminal
//! - from the clipboard with `--clipboard`
//! - from piped stdin otherwise

use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arboard::Clipboard;
use clap::Parser;
use puzzlefmt::{
    CollateError, Config, LineOutcome, PasteSession, PuzzleKind, PuzzleManager, PuzzleRecord,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "puzzlefmt")]
#[command(about = "Collate daily puzzle results into one block for sharing")]
struct Args {
    /// Read input from the clipboard and copy the result back
    #[arg(short, long)]
    clipboard: bool,

    /// Path to config.json
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print recognized puzzles as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// One collated puzzle in `--json` output
#[derive(Serialize)]
struct JsonEntry<'a> {
    kind: PuzzleKind,
    text: String,
    record: &'a PuzzleRecord,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let config_path = Config::locate(args.config.as_deref()).map_err(CollateError::from)?;
    let config = Config::load(&config_path).map_err(CollateError::from)?;
    let manager = PuzzleManager::from_config(&config);
    info!(path = %config_path.display(), "config loaded");

    if args.clipboard {
        clipboard_mode(&manager, args.json)
    } else if io::stdin().is_terminal() {
        interactive_mode(&manager, args.json)
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| CollateError::input(e.to_string()))?;
        println!("{}", render(&manager, &input, args.json)?);
        Ok(())
    }
}

/// Formatted text, or the collated records as JSON
fn render(manager: &PuzzleManager, input: &str, json: bool) -> Result<String> {
    if !json {
        return Ok(manager.process(input));
    }

    let puzzles = manager.collate(input);
    let entries: Vec<JsonEntry<'_>> = puzzles
        .iter()
        .map(|puzzle| JsonEntry {
            kind: puzzle.kind,
            text: manager.render_puzzle(puzzle),
            record: &puzzle.record,
        })
        .collect();

    serde_json::to_string_pretty(&entries).context("failed to serialize puzzles")
}

/// One-shot: clipboard in, clipboard out
fn clipboard_mode(manager: &PuzzleManager, json: bool) -> Result<()> {
    let mut clipboard =
        Clipboard::new().map_err(|e| CollateError::clipboard(e.to_string()))?;
    let input = clipboard
        .get_text()
        .map_err(|e| CollateError::clipboard(e.to_string()))?;

    if input.trim().is_empty() {
        return Err(CollateError::clipboard("clipboard is empty").into());
    }

    eprintln!("Processing puzzle results from clipboard...");
    let output = render(manager, &input, json)?;
    println!("{output}");

    copy_to_clipboard(&mut clipboard, output);
    Ok(())
}

/// Accept pastes until EOF or two blank lines in a row
fn interactive_mode(manager: &PuzzleManager, json: bool) -> Result<()> {
    eprintln!("Paste your puzzle results below, as many as you like.");
    eprintln!("Press Enter twice after the last paste, or Ctrl+D, to finish.");

    let mut session = PasteSession::new();

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| CollateError::input(e.to_string()))?;

        match session.push_line(manager.registry(), line) {
            LineOutcome::Captured(count) => eprintln!("  -> Captured {count} lines"),
            LineOutcome::Finished => break,
            LineOutcome::Pending => {}
        }
    }

    if session.pending_lines() > 0 {
        debug!(lines = session.pending_lines(), "keeping unfinished paste");
    }

    if session.is_empty() {
        eprintln!("No input received.");
        return Ok(());
    }

    let output = render(manager, &session.into_text(), json)?;
    println!("{output}");
    io::stdout().flush().context("failed to flush stdout")?;

    match Clipboard::new() {
        Ok(mut clipboard) => copy_to_clipboard(&mut clipboard, output),
        Err(e) => warn!(error = %e, "clipboard unavailable"),
    }
    Ok(())
}

fn copy_to_clipboard(clipboard: &mut Clipboard, output: String) {
    match clipboard.set_text(output) {
        Ok(()) => eprintln!("Results copied to clipboard."),
        Err(e) => warn!(error = %e, "could not copy results to clipboard"),
    }
}

/// Log to stderr so stdout carries only the collated output
fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("PUZZLEFMT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("puzzlefmt=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
