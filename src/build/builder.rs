use std::path::{Path, PathBuf};

use crate::config::SiteConfig;

use super::article::{ArticlePage, enrich_articles};
use super::markdown::{MarkdownError, render_markdown};
use super::paths::output_path;
use super::render::{RenderError, Renderer};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("markdown error: {0}")]
    Markdown(#[from] MarkdownError),

    #[error("failed to read article {}: {}", .path.display(), .source)]
    ReadArticle {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("articles must map to distinct output files: '{output}' is produced more than once")]
    DuplicateOutput { output: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct BuildResult {
    pub output_dir: PathBuf,
    pub articles: usize,
}

/// Builds the site: one HTML page per article, then the index page.
pub struct Builder {
    config: SiteConfig,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: SiteConfig, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// Run the build.
    ///
    /// The steps run strictly in order and the first failure aborts the
    /// run. The index is rendered last, from in-memory data only - it is
    /// never written when an article fails.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        // Step 1: Derive output filenames (also rejects duplicate targets)
        let pages = enrich_articles(&self.config.articles)?;

        // Step 2: Load both templates up front
        let mut renderer = Renderer::new(&self.templates_dir(), self.config.templates.clone())?;

        let output_dir = self.output_dir();
        std::fs::create_dir_all(&output_dir)?;

        // Step 3: Render and write each article page
        let articles_dir = self.articles_dir();
        for page in &pages {
            self.write_article(page, &articles_dir, &output_dir, &mut renderer)?;
        }
        println!("Rendered {} article page(s)", pages.len());

        // Step 4: Render and write the index page
        let index_html = renderer.render_index(&self.config.topics, &pages)?;
        std::fs::write(output_dir.join("index.html"), index_html)?;

        Ok(BuildResult {
            output_dir,
            articles: pages.len(),
        })
    }

    /// Render one article page and write it to the output directory.
    fn write_article(
        &self,
        page: &ArticlePage,
        articles_dir: &Path,
        output_dir: &Path,
        renderer: &mut Renderer,
    ) -> Result<(), BuildError> {
        let input_path = articles_dir.join(&page.source);
        let raw = std::fs::read_to_string(&input_path).map_err(|e| BuildError::ReadArticle {
            path: input_path.clone(),
            source: e,
        })?;

        let content = render_markdown(&raw, &self.config.markdown)?;
        let html = renderer.render_article(&page.title, &content)?;

        let out = output_path(output_dir, &page.source_html);
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out, html)?;

        Ok(())
    }

    fn articles_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.articles)
    }

    fn templates_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.templates)
    }

    fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.output)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.base_path.join(path)
        } else {
            path.to_path_buf()
        }
    }
}
