//! Reads the JSON users file that seeds [`InMemoryUserLookup`].
//!
//! The file holds an array of `{ "id": <integer>, "name": <text> }` objects.
//! Access goes through `cap_std` rather than `std::fs`.
//!
//! [`InMemoryUserLookup`]: super::InMemoryUserLookup

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;

use crate::domain::User;

/// Failures while loading a users file.
#[derive(Debug, Error)]
pub enum UsersFileError {
    /// The file could not be opened or read.
    #[error("failed to read users file at {path}: {source}")]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a JSON array of users.
    #[error("failed to parse users file at {path}: {source}")]
    Parse {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Load every user listed in the file at `path`.
///
/// # Errors
/// Returns [`UsersFileError::Read`] when the file is missing or unreadable and
/// [`UsersFileError::Parse`] when it is not a JSON array of users.
pub fn load_users_file(path: &Path) -> Result<Vec<User>, UsersFileError> {
    let read_error = |source| UsersFileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "users file path must name a file",
        ))
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;

    serde_json::from_str(&contents).map_err(|source| UsersFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
