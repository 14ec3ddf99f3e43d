// src/links/mod.rs
// =============================================================================
// Everything we read out of a single markdown document's text.
//
// Submodules:
// - markdown: Finds links to other local markdown files
// - title: Picks a chapter title from headings or the file name
//
// No I/O happens here. These functions only look at strings.
// =============================================================================

mod markdown;
mod title;

pub use markdown::{extract_markdown_links, has_markdown_extension};
pub use title::derive_title;
