// src/fs/loader.rs
// =============================================================================
// This module reads document text for the traversal.
//
// The traversal never touches the file system directly. It asks a
// ContentLoader, so tests can hand it an in-memory map instead.
//
// Rust concepts:
// - Traits: A shared interface the engine is generic over
// - impl Future in traits: Lets implementors write `async fn`
// =============================================================================

use crate::error::LoadError;
use std::future::Future;
use std::path::Path;

// Reads a document's raw text by reference
//
// Implementations must not panic on a missing or unreadable document.
// They return a LoadError and the traversal skips that document.
pub trait ContentLoader {
    fn load(&self, reference: &Path) -> impl Future<Output = Result<String, LoadError>> + Send;
}

// Loads documents from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl ContentLoader for FsLoader {
    async fn load(&self, reference: &Path) -> Result<String, LoadError> {
        tokio::fs::read_to_string(reference)
            .await
            .map_err(|source| LoadError::Io {
                path: reference.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "# Hello\n").unwrap();

        let text = FsLoader.load(&path).await.unwrap();
        assert_eq!(text, "# Hello\n");
    }

    #[tokio::test]
    async fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.md");

        let err = FsLoader.load(&path).await.unwrap_err();
        match err {
            LoadError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_load_invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FsLoader.load(&path).await.is_err());
    }
}
