// src/links/title.rs
// =============================================================================
// Chapter titles for collected documents.
//
// Order of preference:
// 1. The first level-1 heading ("# Title") anywhere in the document
// 2. The first level-2 heading ("## Title")
// 3. The file name with its .md / .markdown extension removed
// =============================================================================

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("valid h1 regex"));
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##\s+(.+)$").expect("valid h2 regex"));
static MARKDOWN_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|markdown)$").expect("valid suffix regex"));

// Derives the title for a document
//
// Parameters:
//   content: the document's raw markdown
//   reference: the path the document was loaded from
//
// Example:
//   derive_title("# Title A\n\nbody", "/docs/a.md") == "Title A"
//   derive_title("no headings", "/docs/notes.md") == "notes"
pub fn derive_title(content: &str, reference: &Path) -> String {
    extract_heading_title(content).unwrap_or_else(|| file_stem_title(reference))
}

// First h1, falling back to the first h2
pub fn extract_heading_title(markdown: &str) -> Option<String> {
    [&*H1, &*H2].into_iter().find_map(|pattern| {
        pattern
            .captures(markdown)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

// Last path segment without a markdown extension
//
// Splits on both '/' and '\' so Windows-style references that reach us as
// plain strings still produce a short name.
pub fn file_stem_title(reference: &Path) -> String {
    let text = reference.to_string_lossy();
    let file_name = text.rsplit(['/', '\\']).next().unwrap_or_default();
    MARKDOWN_SUFFIX.replace(file_name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h1_title() {
        assert_eq!(derive_title("# Title A\n\nbody", Path::new("/docs/a.md")), "Title A");
    }

    #[test]
    fn test_h1_wins_over_earlier_h2() {
        let content = "## Section\n\ntext\n\n# Real Title\n";
        assert_eq!(extract_heading_title(content), Some("Real Title".to_string()));
    }

    #[test]
    fn test_h2_fallback() {
        let content = "intro\n\n## Getting Started  \n\nmore";
        assert_eq!(extract_heading_title(content), Some("Getting Started".to_string()));
    }

    #[test]
    fn test_h3_is_not_a_title() {
        assert_eq!(extract_heading_title("### Deep\n"), None);
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        assert_eq!(extract_heading_title("#hashtag\n"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(extract_heading_title("# Windows\r\nbody\r\n"), Some("Windows".to_string()));
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(derive_title("just text", Path::new("/docs/notes.md")), "notes");
    }

    #[test]
    fn test_filename_fallback_strips_only_markdown_extension() {
        assert_eq!(file_stem_title(Path::new("/docs/Guide.MARKDOWN")), "Guide");
        assert_eq!(file_stem_title(Path::new("/docs/archive.tar")), "archive.tar");
        assert_eq!(file_stem_title(Path::new("v1.2.md")), "v1.2");
    }

    #[test]
    fn test_filename_fallback_backslash_separator() {
        assert_eq!(file_stem_title(Path::new(r"C:\docs\readme.md")), "readme");
    }
}
