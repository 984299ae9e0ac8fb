//! Score persistence — one plain-text file holding the decimal score.
//!
//! The format is the whole contract: the file contains the score as decimal
//! text and nothing else, rewritten wholesale on save. A missing file means
//! a first run, not an error. Unreadable or unparsable contents are reported
//! to the caller, which logs a warning and plays on from zero.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directory (next to the executable) holding the save file.
pub const SAVE_DIR: &str = "SaveGames";

/// Save file name. The extension is historical.
pub const SAVE_FILE: &str = "SaveGame.ylwfo";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("save file does not hold a score: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

/// Handle to the backing store location.
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `SaveGames/SaveGame.ylwfo` next to the executable,
    /// falling back to the working directory.
    pub fn default_location() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(SAVE_DIR).join(SAVE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted score. `Ok(None)` on first run (no file yet).
    pub fn load(&self) -> Result<Option<u64>, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let score = text.trim().parse::<u64>()?;
        Ok(Some(score))
    }

    /// Overwrite the backing store with the score's decimal text, creating
    /// the save directory if needed.
    pub fn save(&self, score: u64) -> Result<(), SaveError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}
