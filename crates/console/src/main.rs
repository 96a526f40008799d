// Chunk: docs/chunks/console_repl - Binary entry point and REPL loop

//! The etch binary: argument parsing, logging setup, and the
//! read-eval-print loop over stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use etch::{parse_command, session, Command, Console, SessionState};

/// A line-command console over a gap-buffer text editing engine.
#[derive(Debug, Parser)]
#[command(name = "etch", version)]
struct Cli {
    /// File to open at startup. When omitted, the last session's file
    /// is reopened.
    file: Option<PathBuf>,

    /// Skip loading and saving the session file.
    #[arg(long)]
    no_session: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Console::new();

    if let Some(path) = cli.file {
        let outcome = console.execute(Command::Open(path));
        println!("{}", outcome.message);
    } else if !cli.no_session {
        if let Some(state) = session::load_session() {
            info!(file = %state.file.display(), cursor = state.cursor, "restoring session");
            let outcome = console.execute(Command::Open(state.file));
            println!("{}", outcome.message);
            // set_cursor clamps, so a file that shrank since the last
            // run cannot put the cursor out of bounds.
            console.execute(Command::SetCursor(state.cursor));
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = console.execute(parse_command(&line));
        if !outcome.message.is_empty() {
            println!("{}", outcome.message);
        }
        stdout.flush()?;
        if outcome.quit {
            break;
        }
    }

    if !cli.no_session {
        if let Some(file) = console.file() {
            let state = SessionState::new(file.to_path_buf(), console.engine().cursor());
            if let Err(e) = session::save_session(&state) {
                eprintln!("Failed to save session: {}", e);
            }
        }
    }

    Ok(())
}
