// src/lib.rs
// =============================================================================
// mdbundle: follow relative links between markdown files and collect every
// reachable document, in reading order, ready to be stitched into one book.
//
// Modules:
// - links: Reads links and titles out of a document's text (no I/O)
// - fs: Loads documents and resolves link targets on the file system
// - traverse: The breadth-first walk that ties the two together
// - error: Typed loader / resolver failures
//
// The binary in src/main.rs is a thin CLI over `traverse_with_report`.
// =============================================================================

pub mod error;
pub mod fs;
pub mod links;
pub mod traverse;

pub use fs::{FsLoader, FsResolver};
pub use traverse::{traverse, traverse_with_report, DocumentRecord, TraversalReport};
