// src/fs/resolve.rs
// =============================================================================
// This module turns a link target written inside a document into the path of
// the document it points at.
//
// Resolution policy for a link found in `base`:
// 1. Join the target onto the directory containing `base`
// 2. If a file exists there, that's the answer
// 3. Otherwise, if the path has no .md/.markdown extension, try adding ".md"
// 4. ...then try adding ".markdown"
// 5. Otherwise report the joined path with exists = false
//
// Paths are normalized lexically ("a/./b/../c" becomes "a/c") instead of with
// fs::canonicalize, because a missing target still needs a stable path and
// canonicalize fails on paths that don't exist.
//
// Rust concepts:
// - Path / PathBuf: Borrowed and owned file system paths
// - Components: Iterate a path piece by piece (root, "..", names)
// =============================================================================

use crate::error::ResolveError;
use crate::links::has_markdown_extension;
use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

// Extensions tried, in order, when a link omits one
const PROBE_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

// The outcome of resolving one link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Absolute, normalized path with no fragment
    pub canonical: PathBuf,
    /// Whether a document was actually found at `canonical`
    pub exists: bool,
}

// Resolves a raw link target relative to the document that contains it
//
// Returning Ok with exists = false is the normal answer for a dangling link.
// Err is reserved for targets that can't be resolved at all.
pub trait ReferenceResolver {
    fn resolve(
        &self,
        base: &Path,
        raw_target: &str,
    ) -> impl Future<Output = Result<Resolved, ResolveError>> + Send;
}

// Resolves links against the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResolver;

impl ReferenceResolver for FsResolver {
    async fn resolve(&self, base: &Path, raw_target: &str) -> Result<Resolved, ResolveError> {
        if raw_target.trim().is_empty() {
            return Err(ResolveError::EmptyTarget {
                base: base.to_path_buf(),
            });
        }

        let base_dir = base.parent().unwrap_or_else(|| Path::new("."));
        let candidate = normalize_path(&base_dir.join(raw_target));

        if is_file(&candidate).await? {
            return Ok(Resolved {
                canonical: candidate,
                exists: true,
            });
        }

        if !has_markdown_extension(&candidate.to_string_lossy()) {
            for extension in PROBE_EXTENSIONS {
                let probe = append_suffix(&candidate, extension);
                trace!(path = %probe.display(), "probing");
                if is_file(&probe).await? {
                    return Ok(Resolved {
                        canonical: probe,
                        exists: true,
                    });
                }
            }
        }

        Ok(Resolved {
            canonical: candidate,
            exists: false,
        })
    }
}

// Folds "." and ".." out of a path without touching the disk
//
// ".." never climbs above the root of an absolute path. Leading ".." in a
// relative path are kept since there is nothing to cancel them against.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

// Makes a path absolute against the current directory, then normalizes it
//
// Used for the start document so that it is keyed the same way as the
// canonical paths the resolver produces.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

// "notes" + ".md" -> "notes.md" (textual, unlike Path::set_extension)
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}

async fn is_file(path: &Path) -> Result<bool, ResolveError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        // "notes.md/child.md" where notes.md is a file fails with ENOTDIR
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(source) => Err(ResolveError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
