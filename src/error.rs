use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("{path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("{path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("permission denied reading {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = PathBuf::from(path);
        match err.kind() {
            io::ErrorKind::NotFound => ListingError::NotFound { path },
            io::ErrorKind::NotADirectory => ListingError::NotADirectory { path },
            io::ErrorKind::PermissionDenied => ListingError::PermissionDenied { path },
            _ => ListingError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ListingError::NotFound { path }
            | ListingError::NotADirectory { path }
            | ListingError::PermissionDenied { path }
            | ListingError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io() {
        let p = Path::new("/foo/bar");
        let from_kind = |kind: io::ErrorKind| ListingError::from_io(p, io::Error::from(kind));
        assert!(matches!(from_kind(io::ErrorKind::NotFound), ListingError::NotFound { .. }));
        assert!(matches!(
            from_kind(io::ErrorKind::PermissionDenied),
            ListingError::PermissionDenied { .. }
        ));
        assert!(matches!(
            from_kind(io::ErrorKind::NotADirectory),
            ListingError::NotADirectory { .. }
        ));
        let other = ListingError::from_io(p, io::Error::other("boom"));
        assert!(matches!(other, ListingError::Io { .. }));
    }

    #[test]
    fn test_display() {
        let err = ListingError::NotFound { path: PathBuf::from("missing") };
        assert_eq!(format!("{}", err), "\"missing\" does not exist");
        assert_eq!(err.path(), Path::new("missing"));
    }
}
