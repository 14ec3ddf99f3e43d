// src/error.rs
// =============================================================================
// Error types for the two collaborators the traversal depends on.
//
// Neither of these ever stops a traversal. The engine logs them and moves on:
// - LoadError: a document could not be read, so it gets no chapter
// - ResolveError: a link target could not be turned into a path, so the
//   link is not followed
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - #[source]: Keeps the underlying io::Error in the error chain
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a document's text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("document {path} is empty")]
    Empty { path: PathBuf },
}

/// Failure to turn a raw link target into a canonical path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("empty link target in {base}")]
    EmptyTarget { base: PathBuf },

    #[error("failed to probe {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
