// Chunk: docs/chunks/console_commands - Command line language

//! Command parsing for the console.
//!
//! Each input line parses to exactly one [`Command`]. Blank lines are
//! no-ops, and anything unrecognized parses to [`Command::Unknown`] so
//! the caller can report it without side effects. The `i` command takes
//! the rest of the line verbatim, whitespace included, and `open`/`w`
//! take the rest of the line as the path so paths with spaces work;
//! the numeric commands split their arguments on whitespace.

use std::path::PathBuf;

/// Parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert text at the cursor (`i <text>`).
    Insert(String),
    /// Insert a newline character (`nl`).
    Newline,
    /// Backward delete, repeated (`bs [n]`).
    DeleteBackward(usize),
    /// Forward delete of n characters (`del [n]`).
    DeleteForward(usize),
    /// Move the cursor to a linear offset (`cur <n>`).
    SetCursor(usize),
    /// Move the cursor to a 0-based row and column (`goto <row> <col>`).
    Goto { row: usize, col: usize },
    /// Print the content with the cursor marker (`p`).
    Print,
    /// Print document status (`st`).
    Status,
    /// Open a file (`open <path>`).
    Open(PathBuf),
    /// Write to the associated or given path (`w [path]`).
    Write(Option<PathBuf>),
    /// Undo one step (`undo` or `u`).
    Undo,
    /// Redo one step (`redo` or `r`).
    Redo,
    /// Show the command summary (`help`).
    Help,
    /// Quit the console (`q`).
    Quit,
    /// Blank line.
    Empty,
    /// Unrecognized input, kept for the error message.
    Unknown(String),
}

/// Parses one input line into a command.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    // `i` keeps the remainder verbatim: inserted text may start or end
    // with whitespace the user typed, so only the leading whitespace
    // before the command name is stripped.
    let verbatim = line.trim_start();
    if verbatim == "i" {
        return Command::Insert(String::new());
    }
    if let Some(rest) = verbatim.strip_prefix("i ") {
        return Command::Insert(rest.to_string());
    }

    // Path arguments are the rest of the line, not one whitespace
    // token: real paths contain spaces.
    if let Some(rest) = verbatim.strip_prefix("open ") {
        let path = rest.trim();
        if !path.is_empty() {
            return Command::Open(PathBuf::from(path));
        }
        return Command::Unknown(trimmed.to_string());
    }
    if let Some(rest) = verbatim.strip_prefix("w ") {
        let path = rest.trim();
        if !path.is_empty() {
            return Command::Write(Some(PathBuf::from(path)));
        }
        return Command::Write(None);
    }

    let mut parts = trimmed.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (head, args.as_slice()) {
        ("nl", []) => Command::Newline,
        ("bs", []) => Command::DeleteBackward(1),
        ("bs", [n]) => match n.parse() {
            Ok(n) => Command::DeleteBackward(n),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        ("del", []) => Command::DeleteForward(1),
        ("del", [n]) => match n.parse() {
            Ok(n) => Command::DeleteForward(n),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        ("cur", [n]) => match n.parse() {
            Ok(n) => Command::SetCursor(n),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        ("goto", [row, col]) => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Command::Goto { row, col },
            _ => Command::Unknown(trimmed.to_string()),
        },
        ("p", []) => Command::Print,
        ("st", []) => Command::Status,
        ("w", []) => Command::Write(None),
        ("undo", []) | ("u", []) => Command::Undo,
        ("redo", []) | ("r", []) => Command::Redo,
        ("help", []) => Command::Help,
        ("q", []) => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
