//! Configuration type definitions.
//!
//! This module contains all the data structures used in gazette configuration
//! files. These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Root config
// =============================================================================

/// Root site configuration - the parsed form of `config.json`.
///
/// Only `articles` and `topics` are required; the remaining sections fall
/// back to their defaults when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The articles to render, in the order they appear on the index page
    pub articles: Vec<ArticleConfig>,
    /// Topic values passed through to the index template unmodified.
    /// Gazette does not interpret their structure - the template owns it.
    pub topics: Vec<serde_json::Value>,
    /// Project directory layout
    #[serde(default)]
    pub paths: PathsConfig,
    /// Template loading options
    #[serde(default)]
    pub templates: TemplateOptions,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

/// One article as declared in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleConfig {
    /// Path of the Markdown source, relative to the articles directory
    /// (e.g., "guides/first-post.md")
    pub source: PathBuf,
    /// Display title, used by both the article and index templates
    pub title: String,
}

// =============================================================================
// Paths configuration
// =============================================================================

/// Project directory layout, resolved against the config file's directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the Markdown sources
    #[serde(default = "default_articles_dir")]
    pub articles: PathBuf,
    /// Directory holding `article.html` and `index.html`
    #[serde(default = "default_templates_dir")]
    pub templates: PathBuf,
    /// Root of the generated site
    #[serde(default = "default_output_dir")]
    pub output: PathBuf,
}

fn default_articles_dir() -> PathBuf {
    PathBuf::from("articles")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("site")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            articles: default_articles_dir(),
            templates: default_templates_dir(),
            output: default_output_dir(),
        }
    }
}

// =============================================================================
// Template options
// =============================================================================

/// Options applied when loading template files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Re-read a template from disk when its modification time changes
    /// between renders. Off by default.
    #[serde(default)]
    pub auto_reload: bool,
    /// Remove the newline immediately following a `{% ... %}` block tag
    #[serde(default = "default_true")]
    pub trim_blocks: bool,
    /// Remove indentation from line start up to a `{% ... %}` block tag
    #[serde(default = "default_true")]
    pub lstrip_blocks: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            auto_reload: false,
            trim_blocks: true,
            lstrip_blocks: true,
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "footnotes".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
        "tasklists".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}
