// Chunk: docs/chunks/console_repl - Command execution against the engine

//! Command execution.
//!
//! [`Console`] owns one [`TextEngine`] plus the associated file path,
//! and executes parsed [`Command`]s against them. Every execution
//! returns an [`Outcome`]: a status message for the user and a quit
//! flag. File errors never abort the console; they become status
//! messages and the loop continues.
//!
//! File handling keeps the engine honest about its external contract:
//! `open` passes the whole file content into `load_content`, and `w`
//! writes whatever `content()` returns, never any internal state.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use etch_engine::TextEngine;

use crate::command::Command;
use crate::position::{offset_at, position_at, Position};

const HELP_TEXT: &str = "\
commands:
  i <text>        insert text at the cursor
  nl              insert a newline
  bs [n]          backspace n times (default 1)
  del [n]         delete n characters after the cursor (default 1)
  cur <offset>    move the cursor to a linear offset
  goto <row> <col>  move the cursor to a 0-based row and column
  p               print the document with a | cursor marker
  st              print length, cursor, and history status
  open <path>     load a file
  w [path]        write to the associated or given path
  undo, u         undo one step
  redo, r         redo one step
  help            this summary
  q               quit";

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Status line for the user. Empty means print nothing.
    pub message: String,
    /// True when the console should stop reading input.
    pub quit: bool,
}

impl Outcome {
    fn status(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            message: String::new(),
            quit: true,
        }
    }
}

/// One editing session: an engine plus the file it is associated with.
#[derive(Debug, Default)]
pub struct Console {
    engine: TextEngine,
    file: Option<PathBuf>,
}

impl Console {
    /// Creates a console over an empty document with no associated
    /// file.
    pub fn new() -> Self {
        Self {
            engine: TextEngine::new(),
            file: None,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &TextEngine {
        &self.engine
    }

    /// The file the document is associated with, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Executes one command and returns its outcome.
    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(?command, "executing");
        match command {
            Command::Insert(text) => {
                let count = text.chars().count();
                match self.engine.insert_str(&text) {
                    Ok(()) => Outcome::status(format!("inserted {count} characters")),
                    Err(e) => Outcome::status(format!("insert failed: {e}")),
                }
            }
            Command::Newline => match self.engine.insert_char('\n') {
                Ok(()) => Outcome::status("inserted newline"),
                Err(e) => Outcome::status(format!("insert failed: {e}")),
            },
            Command::DeleteBackward(count) => {
                // One engine call per backspace, like key repeat would
                // produce; each is its own undo step.
                let mut deleted = 0;
                for _ in 0..count {
                    if self.engine.delete_char().is_none() {
                        break;
                    }
                    deleted += 1;
                }
                Outcome::status(format!("deleted {deleted} characters"))
            }
            Command::DeleteForward(count) => {
                let deleted = self.engine.delete_from_cursor(count);
                Outcome::status(format!("deleted {deleted} characters"))
            }
            Command::SetCursor(offset) => {
                self.engine.set_cursor(offset);
                Outcome::status(format!("cursor at {}", self.engine.cursor()))
            }
            Command::Goto { row, col } => {
                let offset = offset_at(&self.engine.content(), Position::new(row, col));
                self.engine.set_cursor(offset);
                let landed = position_at(&self.engine.content(), self.engine.cursor());
                Outcome::status(format!(
                    "cursor at {} (row {}, col {})",
                    self.engine.cursor(),
                    landed.row,
                    landed.col
                ))
            }
            Command::Print => Outcome::status(self.engine.content_with_cursor()),
            Command::Status => {
                let here = position_at(&self.engine.content(), self.engine.cursor());
                Outcome::status(format!(
                    "{} characters, cursor at {} (row {}, col {}), {} undo / {} redo",
                    self.engine.len(),
                    self.engine.cursor(),
                    here.row,
                    here.col,
                    self.engine.undo_depth(),
                    self.engine.redo_depth(),
                ))
            }
            Command::Open(path) => self.open(path),
            Command::Write(path) => self.write(path),
            Command::Undo => {
                if self.engine.undo() {
                    Outcome::status("undid 1 step")
                } else {
                    Outcome::status("nothing to undo")
                }
            }
            Command::Redo => {
                if self.engine.redo() {
                    Outcome::status("redid 1 step")
                } else {
                    Outcome::status("nothing to redo")
                }
            }
            Command::Help => Outcome::status(HELP_TEXT),
            Command::Quit => Outcome::quit(),
            Command::Empty => Outcome::status(""),
            Command::Unknown(line) => {
                Outcome::status(format!("unknown command: {line} (try help)"))
            }
        }
    }

    /// Loads `path` into the engine and associates the document with
    /// it.
    fn open(&mut self, path: PathBuf) -> Outcome {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => return Outcome::status(format!("cannot open {}: {e}", path.display())),
        };
        if let Err(e) = self.engine.load_content(&content) {
            return Outcome::status(format!("cannot load {}: {e}", path.display()));
        }
        info!(path = %path.display(), len = self.engine.len(), "opened");
        let message = format!("opened {} ({} characters)", path.display(), self.engine.len());
        self.file = Some(path);
        Outcome::status(message)
    }

    /// Writes the document to `path`, or to the associated file when no
    /// path is given. A successful explicit path becomes the new
    /// association.
    fn write(&mut self, path: Option<PathBuf>) -> Outcome {
        let target = match path.or_else(|| self.file.clone()) {
            Some(target) => target,
            None => return Outcome::status("no file associated; use: w <path>"),
        };
        let content = self.engine.content();
        if let Err(e) = fs::write(&target, &content) {
            return Outcome::status(format!("cannot write {}: {e}", target.display()));
        }
        info!(path = %target.display(), len = content.chars().count(), "wrote");
        let message = format!(
            "wrote {} characters to {}",
            content.chars().count(),
            target.display()
        );
        self.file = Some(target);
        Outcome::status(message)
    }
}
