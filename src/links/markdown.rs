// src/links/markdown.rs
// =============================================================================
// This module extracts links to other local markdown files from markdown text.
//
// We scan for inline links of the form [label](target) with a regex rather
// than a full CommonMark parser. The scan is deliberately shallow:
// - The first ']' closes the label (no nested brackets)
// - The first ')' closes the target
// - Links inside code blocks are still found
//
// A target is kept only if it points at another markdown document:
// - Web links (http://, https://) are skipped
// - Pure in-page anchors (#section) are skipped
// - The #fragment is cut off, then the path must end in .md or .markdown
//
// Nothing is decoded or deduplicated here. The traversal does that.
//
// Rust concepts:
// - LazyLock statics: Compile the regex once, reuse it for every document
// - Iterators: captures_iter walks matches left to right without overlap
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

// [label](target) with a non-empty label and a non-empty target
static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

// Extracts local markdown links from markdown text
//
// Parameters:
//   markdown: the markdown text to scan (borrowed as &str)
//
// Returns: Vec<String> of raw targets in the order they appear, fragments
// removed, duplicates kept
//
// Example input:
//   "See [the guide](guide.md#install) and [Rust](https://www.rust-lang.org)"
//
// Example output:
//   vec!["guide.md"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    INLINE_LINK
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(2))
        .filter_map(|target| local_markdown_path(target.as_str()))
        .map(str::to_string)
        .collect()
}

// Returns the path part of a link target if it names a local markdown file
fn local_markdown_path(target: &str) -> Option<&str> {
    if is_web_link(target) || target.starts_with('#') {
        return None;
    }

    // Everything from the first '#' on is an anchor inside the target file
    let path = match target.split_once('#') {
        Some((path, _fragment)) => path,
        None => target,
    };

    if !path.is_empty() && has_markdown_extension(path) {
        Some(path)
    } else {
        None
    }
}

fn is_web_link(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

// Case-insensitive check for .md / .markdown
//
// Shared with the resolver, which probes extensions the same way.
pub fn has_markdown_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".md") || lower.ends_with(".markdown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_link() {
        let links = extract_markdown_links("[See other](other.md)");
        assert_eq!(links, vec!["other.md"]);
    }

    #[test]
    fn test_skip_web_links() {
        assert!(extract_markdown_links("[web](https://example.com)").is_empty());
        assert!(extract_markdown_links("[web](http://example.com/readme.md)").is_empty());
    }

    #[test]
    fn test_skip_anchor_only() {
        assert!(extract_markdown_links("[anchor](#section)").is_empty());
    }

    #[test]
    fn test_fragment_is_stripped() {
        let links = extract_markdown_links("[ref](guide.md#install)");
        assert_eq!(links, vec!["guide.md"]);
    }

    #[test]
    fn test_fragment_stripped_before_extension_check() {
        // The extension lives before the '#', so this is not a markdown link
        assert!(extract_markdown_links("[ref](image.png#notes.md)").is_empty());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let links = extract_markdown_links("[a](A.MD) [b](b.Markdown)");
        assert_eq!(links, vec!["A.MD", "b.Markdown"]);
    }

    #[test]
    fn test_skip_non_markdown_targets() {
        let markdown = "[pic](diagram.png) [dir](docs/) [src](main.rs)";
        assert!(extract_markdown_links(markdown).is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let markdown = r#"
# Index

- [Second](b.md)
- [First](a.md)
- [Second again](b.md#top)
        "#;
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec!["b.md", "a.md", "b.md"]);
    }

    #[test]
    fn test_relative_paths_pass_through_unmodified() {
        let markdown = "[up](../parent.md) [space](my%20notes.md) [nested](./a/b.markdown)";
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec!["../parent.md", "my%20notes.md", "./a/b.markdown"]);
    }

    #[test]
    fn test_nested_brackets_not_supported() {
        // The first ']' closes the label, so no '(' follows it
        assert!(extract_markdown_links("[outer [inner]x](a.md)").is_empty());
    }

    #[test]
    fn test_target_ends_at_first_paren() {
        // Target is "notes(v2" which has no markdown extension
        assert!(extract_markdown_links("[x](notes(v2).md)").is_empty());
    }

    #[test]
    fn test_empty_label_or_target_is_not_a_link() {
        assert!(extract_markdown_links("[](a.md)").is_empty());
        assert!(extract_markdown_links("[label]()").is_empty());
    }

    #[test]
    fn test_no_links() {
        assert!(extract_markdown_links("# Title\n\nJust text.").is_empty());
    }
}
