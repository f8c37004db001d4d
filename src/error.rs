//! Error types for content loading
//!
//! Generation itself never fails: missing or invalid content surfaces as an
//! absent result. Only the file-facing layer (manifests, preset files,
//! configuration, export) reports errors.

use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    /// A configured source could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source was read but is not valid RON for the expected shape
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: ron::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the file involved, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Write { path, .. }
            | LoadError::CreateDir { path, .. } => Some(path),
            LoadError::Serialize { .. } => None,
        }
    }

    /// True when the source simply isn't there (as opposed to being malformed)
    pub fn is_missing_source(&self) -> bool {
        matches!(self, LoadError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_detection() {
        let err = LoadError::Read {
            path: PathBuf::from("nowhere.ron"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_missing_source());
        assert_eq!(err.path(), Some(&PathBuf::from("nowhere.ron")));
        assert!(err.to_string().contains("nowhere.ron"));

        let err = LoadError::Read {
            path: PathBuf::from("locked.ron"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"),
        };
        assert!(!err.is_missing_source());
    }
}
