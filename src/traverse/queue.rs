// src/traverse/queue.rs
// =============================================================================
// This module walks the graph of markdown documents breadth-first.
//
// How it works:
// 1. Start with the start document in a queue
// 2. Pop the front of the queue; skip it if we've already visited it
// 3. Mark it visited, then load its text
// 4. Record it as the next chapter (title from headings or file name)
// 5. Extract its markdown links and resolve each one
// 6. Push every resolved, existing, not-yet-visited document onto the queue
// 7. Repeat until the queue is empty
//
// A document is marked visited when it is popped, not when it is pushed. Two
// siblings linking to the same document both push it, and the second pop is
// skipped at step 2. That costs one wasted pop and keeps the loop simple.
//
// Nothing in here returns an error. A document that fails to load is logged
// and skipped (it contributes no links); a link that fails to resolve is
// logged and not followed.
//
// Loads and resolutions are awaited one at a time, so the output order only
// depends on the documents and the order of links inside them.
//
// Rust concepts:
// - HashSet: To track visited documents (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first traversal
// - Generics: The same loop runs over the file system or an in-memory fake
// =============================================================================

use super::record::{DocumentRecord, LoadFailure, TraversalReport, UnresolvedLink};
use crate::error::LoadError;
use crate::fs::{normalize_path, ContentLoader, ReferenceResolver, Resolved};
use crate::links::{derive_title, extract_markdown_links};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// Collects every markdown document reachable from `start`, in reading order
//
// Parameters:
//   start: the first document (normalized lexically before it is queued)
//   loader: reads document text
//   resolver: turns link targets into canonical paths
//
// Returns: one DocumentRecord per distinct, readable, reachable document.
// The start document comes first, then breadth-first by link order.
pub async fn traverse<L, R>(start: &Path, loader: &L, resolver: &R) -> Vec<DocumentRecord>
where
    L: ContentLoader,
    R: ReferenceResolver,
{
    traverse_with_report(start, loader, resolver).await.documents
}

// Same walk as `traverse`, but also keeps what was skipped
pub async fn traverse_with_report<L, R>(start: &Path, loader: &L, resolver: &R) -> TraversalReport
where
    L: ContentLoader,
    R: ReferenceResolver,
{
    // Keyed the same way as the resolver's canonical paths, so a link back
    // to the start document is recognized as visited
    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    queue.push_back(normalize_path(start));

    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut report = TraversalReport::default();

    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            debug!(path = %current.display(), "already visited, skipping");
            report.revisits_skipped += 1;
            continue;
        }

        visited.insert(current.clone());
        debug!(path = %current.display(), "visiting");

        let content = match loader.load(&current).await.and_then(|text| non_empty(text, &current)) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %current.display(), error = %e, "failed to read document, skipping");
                report.failures.push(LoadFailure {
                    file_path: current,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let title = derive_title(&content, &current);
        let links = extract_markdown_links(&content);

        report.documents.push(DocumentRecord {
            file_path: current.clone(),
            content,
            title,
        });

        for link in links {
            match resolver.resolve(&current, &link).await {
                Ok(Resolved {
                    canonical,
                    exists: true,
                }) => {
                    if !visited.contains(&canonical) {
                        queue.push_back(canonical);
                    }
                }
                Ok(Resolved {
                    canonical,
                    exists: false,
                }) => {
                    debug!(source = %current.display(), target = %link, "link target does not exist");
                    report.unresolved.push(UnresolvedLink {
                        source: current.clone(),
                        target: link,
                        reason: format!("no document at {}", canonical.display()),
                    });
                }
                Err(e) => {
                    debug!(source = %current.display(), target = %link, error = %e, "could not resolve link");
                    report.unresolved.push(UnresolvedLink {
                        source: current.clone(),
                        target: link,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        documents = report.documents.len(),
        failures = report.failures.len(),
        unresolved = report.unresolved.len(),
        revisits_skipped = report.revisits_skipped,
        "traversal finished"
    );

    report
}

// An empty document is treated like one that could not be read
fn non_empty(text: String, path: &Path) -> Result<String, LoadError> {
    if text.is_empty() {
        Err(LoadError::Empty {
            path: path.to_path_buf(),
        })
    } else {
        Ok(text)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a queue instead of recursion?
//    - Recursion would follow one chain of links all the way down first
//    - A long chain could grow the call stack without limit
//    - The queue gives breadth-first order: the start document, then every
//      document it links to, then the documents those link to, etc.
//
// 2. How do cycles end?
//    - A links to B, B links back to A
//    - When A is pushed the second time, the pop finds it in `visited`
//    - `visited` only grows and the set of files is finite, so the loop stops
//
// 3. What does `where L: ContentLoader` mean?
//    - L can be any type that implements the ContentLoader trait
//    - The compiler makes a separate copy of the function for each type
//      (monomorphization), so there is no runtime cost
//
// 4. Why match on `Resolved { exists: true, .. }` patterns?
//    - Struct patterns can check a field's value and bind the others
//    - It reads like the rule: follow the link only if the document exists
// -----------------------------------------------------------------------------
