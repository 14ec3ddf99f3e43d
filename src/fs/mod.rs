// src/fs/mod.rs
// =============================================================================
// The two file system collaborators the traversal is generic over.
//
// Submodules:
// - loader: Reads a document's text (ContentLoader, FsLoader)
// - resolve: Turns a link target into a document path (ReferenceResolver,
//   FsResolver) and the path helpers it relies on
//
// The traversal only reads. Nothing in this module writes to disk.
// =============================================================================

mod loader;
mod resolve;

pub use loader::{ContentLoader, FsLoader};
pub use resolve::{absolutize, normalize_path, FsResolver, ReferenceResolver, Resolved};

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why traits instead of calling tokio::fs directly?
//    - The traversal takes `&impl ContentLoader` and `&impl ReferenceResolver`
//    - Production code passes FsLoader / FsResolver
//    - Tests pass a HashMap-backed fake, so no temp files are needed there
//
// 2. Why is this module called `fs` when std also has `fs`?
//    - Inside our crate it is `crate::fs`, std's is `std::fs`
//    - The full paths never collide
// -----------------------------------------------------------------------------
