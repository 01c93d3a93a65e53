//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Convert Markdown text to an HTML fragment using pulldown-cmark.
///
/// The converter is permissive: arbitrary text always renders to
/// something. The only failure mode is an unrecognized extension name in
/// the configuration, which is rejected before any parsing happens.
pub fn render_markdown(
    markdown: &str,
    markdown_config: &MarkdownConfig,
) -> Result<String, MarkdownError> {
    let mut options = Options::empty();
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    Ok(html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        let config = MarkdownConfig::default();

        let output = render_markdown("# Hi", &config).unwrap();

        assert!(output.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_render_paragraph_and_emphasis() {
        let config = MarkdownConfig::default();

        let output = render_markdown("Some *emphatic* text", &config).unwrap();

        assert!(output.contains("<p>Some <em>emphatic</em> text</p>"));
    }

    #[test]
    fn test_render_table_with_extension() {
        let config = MarkdownConfig {
            extensions: vec!["tables".to_string()],
        };

        let output =
            render_markdown("| a | b |\n|---|---|\n| 1 | 2 |", &config).unwrap();

        assert!(output.contains("<table>"));
    }

    #[test]
    fn test_render_empty_input() {
        let config = MarkdownConfig { extensions: vec![] };

        let output = render_markdown("", &config).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_extension() {
        let config = MarkdownConfig {
            extensions: vec!["not_a_real_extension".to_string()],
        };

        let result = render_markdown("# Test", &config);
        assert!(result.is_err());
    }
}
