// Chunk: docs/chunks/console_commands - Command line language
// Chunk: docs/chunks/console_repl - Command execution against the engine
// Chunk: docs/chunks/coordinate_translation - Row/column to offset translation
// Chunk: docs/chunks/session_persistence - Session persistence

//! etch: a line-command console front end over the etch editing engine.
//!
//! The engine never touches the outside world; this crate is the caller
//! that does. It reads command lines, translates (row, column)
//! coordinates to the linear offsets the engine speaks, moves whole
//! files in and out of the engine, and persists a one-file session
//! between runs.
//!
//! # Example
//!
//! ```
//! use etch::{parse_command, Console};
//!
//! let mut console = Console::new();
//! console.execute(parse_command("i hello world"));
//! console.execute(parse_command("goto 0 5"));
//!
//! let outcome = console.execute(parse_command("p"));
//! assert_eq!(outcome.message, "hello| world");
//! ```

pub mod command;
pub mod console;
pub mod position;
pub mod session;

pub use command::{parse_command, Command};
pub use console::{Console, Outcome};
pub use position::{offset_at, position_at, Position};
pub use session::SessionState;
