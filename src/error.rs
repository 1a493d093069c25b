//! All error types for the strings2android crate.
//!
//! [`Error`] is returned from fallible file and directory operations.
//! [`EntryError`] describes why a single `.strings` line was skipped; it never
//! aborts a conversion.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot list directory `{}`: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access file `{}`: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a directory access error for `path`.
    pub fn directory_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::DirectoryAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a file access error for `path`.
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error must stop the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::DirectoryAccess { .. })
    }
}

/// Reason a single line of a `.strings` file produced no `<string>` element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("could not parse line contents")]
    Parse,

    #[error("invalid key string `{key}`")]
    InvalidKey { key: String },
}
