//! Article enrichment: from configured articles to renderable pages.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

use super::builder::BuildError;
use super::paths::html_output_name;
use crate::config::ArticleConfig;

/// An article enriched with its derived output filename.
///
/// Built fresh from the configuration; enrichment never mutates the
/// configured articles. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
    /// Path of the Markdown source, relative to the articles directory
    pub source: PathBuf,
    /// Display title
    pub title: String,
    /// Output filename relative to the site root, forward-slash form.
    /// The index template links to this.
    pub source_html: String,
}

/// Compute each article's output filename, preserving configured order.
///
/// The index links pages by output filename, so two articles may not
/// share one; duplicates are rejected before any rendering starts.
pub fn enrich_articles(articles: &[ArticleConfig]) -> Result<Vec<ArticlePage>, BuildError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut pages = Vec::with_capacity(articles.len());

    for article in articles {
        let source_html = html_output_name(&article.source);
        if !seen.insert(source_html.clone()) {
            return Err(BuildError::DuplicateOutput {
                output: source_html,
            });
        }

        pages.push(ArticlePage {
            source: article.source.clone(),
            title: article.title.clone(),
            source_html,
        });
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(source: &str, title: &str) -> ArticleConfig {
        ArticleConfig {
            source: source.into(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_enrich_preserves_order_and_input() {
        let configured = vec![
            article("b.md", "B"),
            article("a.md", "A"),
            article("guides/c.md", "C"),
        ];

        let pages = enrich_articles(&configured).unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].source_html, "b.html");
        assert_eq!(pages[1].source_html, "a.html");
        assert_eq!(pages[2].source_html, "guides/c.html");

        // The configured articles are untouched
        assert_eq!(configured[0].source, PathBuf::from("b.md"));
    }

    #[test]
    fn test_enrich_rejects_duplicate_outputs() {
        // Different sources, same derived output file
        let configured = vec![article("a.md", "One"), article("a.markdown", "Two")];

        let result = enrich_articles(&configured);

        let Err(BuildError::DuplicateOutput { output }) = result else {
            panic!("expected DuplicateOutput");
        };
        assert_eq!(output, "a.html");
    }

    #[test]
    fn test_enrich_empty() {
        assert!(enrich_articles(&[]).unwrap().is_empty());
    }
}
