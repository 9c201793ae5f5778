use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum ScoreError {
    Io { path: PathBuf, source: io::Error },
    Empty,
    NotAnInteger { found: String },
    Negative { found: i64 },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "high score file {}: {source}", path.display()),
            Self::Empty => write!(f, "high score file is empty"),
            Self::NotAnInteger { found } => write!(f, "high score {found:?} is not an integer"),
            Self::Negative { found } => write!(f, "high score cannot be negative (found {found})"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "settings file {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "settings file {} is not valid: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
