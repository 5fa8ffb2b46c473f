//! Persisted high score: one decimal integer in a plain text file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Read the stored score. A missing, unreadable or malformed file counts as 0.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_score(&path).unwrap_or(0);
        Self { path, best }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished game. Writes the file only when `score` beats the
    /// stored best; returns whether it did.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))?;
        Ok(true)
    }
}

fn read_score(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}
