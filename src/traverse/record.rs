// src/traverse/record.rs
// =============================================================================
// What a traversal hands back to its caller.
//
// - DocumentRecord: one chapter, in reading order
// - LoadFailure: a reachable document we could not read
// - UnresolvedLink: a link we did not follow
// - TraversalReport: all of the above for one run
//
// #[serde(rename_all = "camelCase")] makes `file_path` come out as
// `filePath` in --json output.
// =============================================================================

use serde::Serialize;
use std::path::PathBuf;

/// One collected document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Canonical path the document was loaded from
    pub file_path: PathBuf,
    /// Full raw markdown
    pub content: String,
    /// First h1, else first h2, else the file name
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFailure {
    pub file_path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedLink {
    /// Document containing the link
    pub source: PathBuf,
    /// The link target as written
    pub target: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub documents: Vec<DocumentRecord>,
    pub failures: Vec<LoadFailure>,
    pub unresolved: Vec<UnresolvedLink>,
    /// Queue entries dropped because the document was already visited
    pub revisits_skipped: usize,
}

impl TraversalReport {
    /// True when every reachable document was read
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
