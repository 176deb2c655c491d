//! Unified error types for cjam.

use std::path::PathBuf;
use thiserror::Error;

use crate::assets::decode::DecodeError;

/// All errors that can occur while reading templates or scaffolding a solution.
#[derive(Error, Debug)]
pub enum CjamError {
    // --- Asset store ---

    /// No asset is registered under the (cleaned) virtual path.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The embedded payload could not be base64-decoded or gunzipped.
    #[error("failed to decode embedded asset {path}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },

    // --- Scaffold ---

    /// The language name is not one of the registered names or aliases.
    #[error("unsupported language: {0} (supported: golang, python, node)")]
    UnsupportedLanguage(String),

    /// A file on the real filesystem could not be read, created or written.
    #[error("filesystem error at {path}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error without a known path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, CjamError>`.
pub type Result<T> = std::result::Result<T, CjamError>;
