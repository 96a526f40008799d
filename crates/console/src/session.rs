// Chunk: docs/chunks/session_persistence - Session persistence

//! Session persistence for the console.
//!
//! One record survives between runs: the file that was being edited and
//! where the cursor was. The console saves it on quit and restores it
//! on the next start when no file argument is given.
//!
//! ## File Location
//!
//! The session file lives at `etch/session.json` under the platform
//! config directory (e.g. `~/.config/etch/session.json` on Linux).
//!
//! ## Schema Version
//!
//! The session file includes a schema version. If the version doesn't
//! match the current code, the session is discarded (graceful
//! degradation to fresh start). Any read or parse failure degrades the
//! same way; session loading never produces an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current schema version for the session file.
///
/// Increment this when making breaking changes to the session format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the config directory.
const APP_NAME: &str = "etch";

/// Session file name.
const SESSION_FILENAME: &str = "session.json";

/// The state saved between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// The file that was being edited.
    pub file: PathBuf,
    /// The cursor offset at exit. Clamped on restore, so a file that
    /// shrank in the meantime is still safe to reopen.
    pub cursor: usize,
}

impl SessionState {
    pub fn new(file: PathBuf, cursor: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            file,
            cursor,
        }
    }
}

/// Returns the path to the session file, creating the app directory if
/// needed.
///
/// Returns `None` if the platform config directory cannot be determined
/// or the app directory cannot be created.
pub fn session_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    let app_dir = config_dir.join(APP_NAME);

    if !app_dir.exists() {
        if let Err(e) = fs::create_dir_all(&app_dir) {
            eprintln!("Failed to create session directory {:?}: {}", app_dir, e);
            return None;
        }
    }

    Some(app_dir.join(SESSION_FILENAME))
}

/// Saves the session to the platform session file location.
///
/// Uses atomic write (write to temp file, then rename) to prevent
/// corruption.
pub fn save_session(state: &SessionState) -> io::Result<()> {
    let path = session_file_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine session file path",
        )
    })?;
    write_session_file(&path, state)
}

/// Loads the session from the platform session file location.
///
/// Returns `None` if the file doesn't exist, cannot be read or parsed,
/// or carries a different schema version.
pub fn load_session() -> Option<SessionState> {
    read_session_file(&session_file_path()?)
}

/// Writes a session record to an explicit path.
pub fn write_session_file(path: &Path, state: &SessionState) -> io::Result<()> {
    let json = serde_json::to_string_pretty(state)?;

    // Atomic write: write to temp file, then rename
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Reads a session record from an explicit path, degrading to `None`
/// with a warning on any failure.
pub fn read_session_file(path: &Path) -> Option<SessionState> {
    if !path.exists() {
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read session file: {}", e);
            return None;
        }
    };

    let state: SessionState = match serde_json::from_str(&contents) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to parse session file: {}", e);
            return None;
        }
    };

    if state.schema_version != SCHEMA_VERSION {
        eprintln!(
            "Session schema version mismatch (expected {}, got {})",
            SCHEMA_VERSION, state.schema_version
        );
        return None;
    }

    Some(state)
}
