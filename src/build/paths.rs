//! Path derivation utilities.
//!
//! This module handles conversions between:
//! - Source file paths (relative Markdown paths within the articles directory)
//! - Output filenames (the same relative path with the extension rewritten)
//! - Output file paths (where pages are written in the output directory)

use std::path::{Path, PathBuf};

/// Derive an article's output filename from its Markdown source path.
///
/// The extension is rewritten to `.html` and separators are normalized to
/// `/` so the result can be used directly as a link target on the index
/// page. This is a pure function of the source path, and idempotent: it
/// only rewrites the suffix.
///
/// # Examples
/// ```ignore
/// html_output_name("hello.md") => "hello.html"
/// html_output_name("guides/first-post.md") => "guides/first-post.html"
/// html_output_name("hello.html") => "hello.html"
/// ```
pub fn html_output_name(source: &Path) -> String {
    let with_html = source.with_extension("html");
    with_html.to_string_lossy().replace('\\', "/")
}

/// Map an output filename into the output directory.
pub fn output_path(output_dir: &Path, source_html: &str) -> PathBuf {
    output_dir.join(source_html)
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
