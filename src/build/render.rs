//! Template resolution and rendering.
//!
//! Wraps Tera behind a small `Renderer` that knows about exactly two
//! templates: `article.html` and `index.html`. Template sources are read
//! explicitly rather than globbed so a missing file surfaces as
//! [`RenderError::TemplateNotFound`], and so whitespace control can be
//! applied to the source before Tera parses it.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tera::{Context, Tera};

use super::article::ArticlePage;
use crate::config::TemplateOptions;

/// Template for per-article pages. Receives `title` and `content`.
pub const ARTICLE_TEMPLATE: &str = "article.html";

/// Template for the index page. Receives `topics` and `articles`.
pub const INDEX_TEMPLATE: &str = "index.html";

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("IO error: {0}")]
    Io(std::io::Error),
}

/// A template tracked for reloading.
struct LoadedTemplate {
    name: &'static str,
    path: PathBuf,
    modified: Option<SystemTime>,
}

/// The template renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
    options: TemplateOptions,
    templates: Vec<LoadedTemplate>,
}

impl Renderer {
    /// Create a new renderer loading `article.html` and `index.html` from
    /// the given template directory.
    pub fn new(templates_dir: &Path, options: TemplateOptions) -> Result<Self, RenderError> {
        let mut renderer = Self {
            tera: Tera::default(),
            options,
            templates: Vec::new(),
        };

        for name in [ARTICLE_TEMPLATE, INDEX_TEMPLATE] {
            renderer.load_template(templates_dir, name)?;
        }

        Ok(renderer)
    }

    fn load_template(&mut self, dir: &Path, name: &'static str) -> Result<(), RenderError> {
        let path = dir.join(name);
        let source = read_template(&path)?;
        let modified = modification_time(&path);

        self.register(name, &source)?;
        self.templates.push(LoadedTemplate {
            name,
            path,
            modified,
        });

        Ok(())
    }

    /// Apply whitespace control and hand the source to Tera.
    fn register(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        let source = apply_whitespace_controls(
            source,
            self.options.trim_blocks,
            self.options.lstrip_blocks,
        );
        self.tera.add_raw_template(name, &source)?;
        Ok(())
    }

    /// Render the article template with the given title and HTML fragment.
    pub fn render_article(&mut self, title: &str, content: &str) -> Result<String, RenderError> {
        self.reload_if_changed()?;

        let mut context = Context::new();
        context.insert("title", title);
        context.insert("content", content);

        Ok(self.tera.render(ARTICLE_TEMPLATE, &context)?)
    }

    /// Render the index template with the full topic list and the enriched
    /// article metadata.
    pub fn render_index(
        &mut self,
        topics: &[serde_json::Value],
        articles: &[ArticlePage],
    ) -> Result<String, RenderError> {
        self.reload_if_changed()?;

        let mut context = Context::new();
        context.insert("topics", topics);
        context.insert("articles", articles);

        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }

    /// Re-read any template whose file changed since it was last loaded.
    /// No-op unless `auto_reload` is enabled.
    fn reload_if_changed(&mut self) -> Result<(), RenderError> {
        if !self.options.auto_reload {
            return Ok(());
        }

        for i in 0..self.templates.len() {
            let current = modification_time(&self.templates[i].path);
            if current == self.templates[i].modified {
                continue;
            }

            let source = read_template(&self.templates[i].path)?;
            let name = self.templates[i].name;
            self.register(name, &source)?;
            self.templates[i].modified = current;
        }

        Ok(())
    }
}

fn read_template(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RenderError::TemplateNotFound(path.display().to_string())
        } else {
            RenderError::Io(e)
        }
    })
}

fn modification_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Apply Jinja-style whitespace control to a template source.
///
/// `lstrip` removes spaces and tabs between a line start and a `{%` block
/// tag; `trim` removes the single newline that follows a `%}` block tag.
/// Both rewrite the raw source once, at load time. Expression tags
/// (`{{ ... }}`) and text lines are untouched, and only whitespace
/// directly adjacent to the tag is affected.
fn apply_whitespace_controls(source: &str, trim: bool, lstrip: bool) -> String {
    let mut result = if lstrip {
        source
            .split('\n')
            .map(|line| {
                let stripped = line.trim_start_matches([' ', '\t']);
                if stripped.starts_with("{%") { stripped } else { line }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        source.to_string()
    };

    if trim {
        result = result.replace("%}\n", "%}");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_templates(dir: &Path, article: &str, index: &str) {
        std::fs::write(dir.join(ARTICLE_TEMPLATE), article).unwrap();
        std::fs::write(dir.join(INDEX_TEMPLATE), index).unwrap();
    }

    #[test]
    fn test_whitespace_controls_lstrip() {
        let source = "  {% if x %}\nbody\n  {% endif %}\n";
        let result = apply_whitespace_controls(source, false, true);
        assert_eq!(result, "{% if x %}\nbody\n{% endif %}\n");
    }

    #[test]
    fn test_whitespace_controls_trim() {
        let source = "{% if x %}\nbody\n{% endif %}\n";
        let result = apply_whitespace_controls(source, true, false);
        assert_eq!(result, "{% if x %}body\n{% endif %}");
    }

    #[test]
    fn test_whitespace_controls_leave_text_and_expressions_alone() {
        let source = "  indented text\n  {{ value }}\n";
        let result = apply_whitespace_controls(source, true, true);
        assert_eq!(result, source);
    }

    #[test]
    fn test_whitespace_controls_loop_emits_no_blank_lines() {
        let source = "<ul>\n{% for t in topics %}\n<li>{{ t }}</li>\n{% endfor %}\n</ul>\n";
        let result = apply_whitespace_controls(source, true, true);
        assert_eq!(
            result,
            "<ul>\n{% for t in topics %}<li>{{ t }}</li>\n{% endfor %}</ul>\n"
        );
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        // No template files at all
        let result = Renderer::new(dir.path(), TemplateOptions::default());

        let Err(RenderError::TemplateNotFound(path)) = result else {
            panic!("expected TemplateNotFound");
        };
        assert!(path.ends_with(ARTICLE_TEMPLATE));
    }

    #[test]
    fn test_render_article() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(
            dir.path(),
            "<title>{{ title }}</title><main>{{ content | safe }}</main>",
            "unused",
        );

        let mut renderer = Renderer::new(dir.path(), TemplateOptions::default()).unwrap();
        let html = renderer
            .render_article("Hello", "<h1>Hi</h1>")
            .unwrap();

        assert_eq!(html, "<title>Hello</title><main><h1>Hi</h1></main>");
    }

    #[test]
    fn test_render_index() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(
            dir.path(),
            "unused",
            "{% for t in topics %}[{{ t }}]{% endfor %}{% for a in articles %}<a href=\"{{ a.source_html }}\">{{ a.title }}</a>{% endfor %}",
        );

        let mut renderer = Renderer::new(dir.path(), TemplateOptions::default()).unwrap();
        let topics = vec![serde_json::json!("t1"), serde_json::json!("t2")];
        let articles = vec![ArticlePage {
            source: "a.md".into(),
            title: "A".to_string(),
            source_html: "a.html".to_string(),
        }];

        let html = renderer.render_index(&topics, &articles).unwrap();

        assert_eq!(html, "[t1][t2]<a href=\"a.html\">A</a>");
    }

    #[test]
    fn test_template_cached_without_auto_reload() {
        let dir = tempfile::tempdir().unwrap();
        write_templates(dir.path(), "first: {{ title }}", "unused");

        let mut renderer = Renderer::new(dir.path(), TemplateOptions::default()).unwrap();

        // Overwrite the file after loading; with auto_reload off the
        // renderer must keep using the source it already parsed.
        std::fs::write(dir.path().join(ARTICLE_TEMPLATE), "second: {{ title }}").unwrap();

        let html = renderer.render_article("x", "").unwrap();
        assert_eq!(html, "first: x");
    }
}
