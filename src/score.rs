use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ScoreError;

pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// Persistence for the best score across runs.
///
/// Implementations swallow their own failures: a load that cannot produce a
/// score yields 0 and a save that fails is dropped.
pub trait ScoreStore {
    fn load_score(&mut self) -> u32;
    fn save_score(&mut self, score: u32);
}

/// Reads the first line of `text` as a non-negative decimal integer.
pub fn parse_high_score(text: &str) -> Result<u32, ScoreError> {
    let line = text.lines().next().map(str::trim).unwrap_or_default();
    if line.is_empty() {
        return Err(ScoreError::Empty);
    }
    let value: i64 = line.parse().map_err(|_| ScoreError::NotAnInteger {
        found: line.to_string(),
    })?;
    if value < 0 {
        return Err(ScoreError::Negative { found: value });
    }
    u32::try_from(value).map_err(|_| ScoreError::NotAnInteger {
        found: line.to_string(),
    })
}

/// High score kept as a single line in a plain text file.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u32, ScoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_high_score(&text)
    }

    pub fn write(&self, score: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| ScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHSCORE_FILE)
    }
}

impl ScoreStore for FileScoreStore {
    fn load_score(&mut self) -> u32 {
        match self.read() {
            Ok(score) => {
                tracing::debug!(score, path = %self.path.display(), "loaded high score");
                score
            }
            Err(err) => {
                tracing::info!("no previous high score, using 0: {err}");
                0
            }
        }
    }

    fn save_score(&mut self, score: u32) {
        match self.write(score) {
            Ok(()) => tracing::info!(score, path = %self.path.display(), "saved high score"),
            Err(err) => tracing::warn!("could not save high score: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_first_line() {
        assert_eq!(parse_high_score(" 17 \n").unwrap(), 17);
        assert_eq!(parse_high_score("4\nextra").unwrap(), 4);
    }

    #[test]
    fn rejects_negative_values() {
        assert!(matches!(
            parse_high_score("-3"),
            Err(ScoreError::Negative { found: -3 })
        ));
    }

    #[test]
    fn rejects_garbage_and_empty_files() {
        assert!(matches!(parse_high_score("abc"), Err(ScoreError::NotAnInteger { .. })));
        assert!(matches!(parse_high_score("1.5"), Err(ScoreError::NotAnInteger { .. })));
        assert!(matches!(parse_high_score(""), Err(ScoreError::Empty)));
        assert!(matches!(parse_high_score("   \n9"), Err(ScoreError::Empty)));
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileScoreStore::new(dir.path().join("nope.txt"));
        assert!(matches!(store.read(), Err(ScoreError::Io { .. })));
        assert_eq!(store.load_score(), 0);
    }

    #[test]
    fn corrupt_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "not a number\n").unwrap();
        assert_eq!(FileScoreStore::new(&path).load_score(), 0);
        fs::write(&path, "-12\n").unwrap();
        assert_eq!(FileScoreStore::new(&path).load_score(), 0);
    }

    #[test]
    fn save_then_load_returns_saved_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        let mut store = FileScoreStore::new(&path);
        store.save_score(23);
        assert_eq!(fs::read_to_string(&path).unwrap(), "23\n");
        assert_eq!(store.load_score(), 23);
    }

    #[test]
    fn failed_save_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let mut store = FileScoreStore::new(dir.path());
        store.save_score(5);
        assert!(store.write(5).is_err());
    }
}
