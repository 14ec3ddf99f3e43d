// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the results as a table or JSON
// 5. Exit with proper code (0 = complete, 1 = some documents unreadable, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use mdbundle::fs::{absolutize, ContentLoader};
use mdbundle::links::extract_markdown_links;
use mdbundle::{traverse_with_report, FsLoader, FsResolver, TraversalReport};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }

    let exit_code = match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// --log-level wins, then RUST_LOG, then "warn"
fn init_logging(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter '{}'", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

// Returns:
//   Ok(0) = every reachable document was read
//   Ok(1) = at least one document could not be read
//   Err   = unexpected error (exit code 2)
async fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Collect { start, json } => handle_collect(&start, json).await,
        Commands::Links { file, json } => handle_links(&file, json).await,
    }
}

// Handles the 'collect' subcommand
async fn handle_collect(start: &Path, json: bool) -> Result<i32> {
    let start = absolutize(start)
        .with_context(|| format!("Failed to resolve start path {}", start.display()))?;

    if !json {
        println!("📚 Collecting documents from: {}", start.display());
    }

    let report = traverse_with_report(&start, &FsLoader, &FsResolver).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.is_complete() && !report.documents.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Handles the 'links' subcommand
async fn handle_links(file: &Path, json: bool) -> Result<i32> {
    let content = FsLoader
        .load(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let links = extract_markdown_links(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(0);
    }

    if links.is_empty() {
        println!("✅ No local markdown links in {}", file.display());
        return Ok(0);
    }

    println!("🔗 {} local markdown link(s) in {}", links.len(), file.display());
    for link in &links {
        println!("   {}", link);
    }
    Ok(0)
}

// Prints the collected chapters, then anything that was skipped
fn print_report(report: &TraversalReport) {
    println!();
    println!("{:<5} {:<40} {:<60}", "#", "TITLE", "PATH");
    println!("{}", "=".repeat(105));

    for (position, document) in report.documents.iter().enumerate() {
        println!(
            "{:<5} {:<40} {:<60}",
            position + 1,
            truncate(&document.title, 40),
            document.file_path.display()
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!("❌ Unreadable documents:");
        for failure in &report.failures {
            println!("   {}: {}", failure.file_path.display(), failure.reason);
        }
    }

    if !report.unresolved.is_empty() {
        println!();
        println!("⚠️  Links not followed:");
        for link in &report.unresolved {
            println!("   {} -> {} ({})", link.source.display(), link.target, link.reason);
        }
    }

    println!();
    println!("📊 Summary:");
    println!("   📄 Collected: {}", report.documents.len());
    println!("   ❌ Unreadable: {}", report.failures.len());
    println!("   ⚠️  Not followed: {}", report.unresolved.len());
}

// Shortens a string to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_title() {
        assert_eq!(truncate("Intro", 40), "Intro");
    }

    #[test]
    fn test_truncate_long_title() {
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }

    #[tokio::test]
    async fn test_collect_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.md"), "# Index\n[a](a.md) [gone](gone.md)").unwrap();
        std::fs::write(dir.path().join("a.md"), "# A\n[home](index.md)").unwrap();

        let start = dir.path().join("index.md");
        let report = traverse_with_report(&start, &FsLoader, &FsResolver).await;

        let titles: Vec<&str> = report.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Index", "A"]);
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(handle_collect(&start, true).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_collect_missing_start_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let start = dir.path().join("nothing.md");
        assert_eq!(handle_collect(&start, true).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_links_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(handle_links(&dir.path().join("nothing.md"), false).await.is_err());
    }
}
