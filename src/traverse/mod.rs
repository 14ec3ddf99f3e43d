// src/traverse/mod.rs
// =============================================================================
// This module collects a tree of linked markdown documents.
//
// Features:
// - Breadth-first walk starting from one document
// - Follows only relative links to .md / .markdown files
// - Each document is read at most once, even with cycles
// - Unreadable documents and dangling links are skipped, never fatal
// =============================================================================

mod queue;
mod record;

pub use queue::{traverse, traverse_with_report};
pub use record::{DocumentRecord, LoadFailure, TraversalReport, UnresolvedLink};
