//! High score persistence (a single JSON record on disk).
//!
//! Storage problems never stop the game: a missing, unreadable or corrupt
//! record loads as 0, and a failed write is reported to the caller, who
//! logs it and carries on.

use crate::config::data_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk shape: `{"highscore": 42}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub highscore: u32,
}

/// Where the high score lives.
pub trait ScoreStore {
    /// Stored high score, or 0 if there is none or it can't be read.
    fn load(&self) -> u32;
    /// Replace the stored record.
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// Default record location (~/.ninja-runner/score.json).
pub fn default_score_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("score.json"))
}

/// JSON file store. Writes go to a sibling temp file first and are renamed
/// into place, so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> io::Result<Self> {
        Ok(Self::new(default_score_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "score.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for JsonScoreFile {
    fn load(&self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                tracing::warn!("could not read high score {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match serde_json::from_str::<HighScoreRecord>(&json) {
            Ok(record) => record.highscore,
            Err(e) => {
                tracing::warn!(
                    "ignoring corrupt high score {}: {}",
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(&HighScoreRecord { highscore: score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            e
        })
    }
}

/// In-memory store, used when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.value = Some(score);
        Ok(())
    }
}
