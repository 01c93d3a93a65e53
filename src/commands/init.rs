use crate::{
    InitArgs,
    config::{ArticleConfig, SiteConfig},
};

const STARTER_ARTICLE: &str = "# Welcome\n\nYour first article. Edit `articles/welcome.md`, then run `gazette build`.\n";

const STARTER_ARTICLE_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <title>{{ title }}</title>
  </head>
  <body>
    <h1>{{ title }}</h1>
    <main>
{{ content | safe }}
    </main>
    <p><a href="index.html">Back to the index</a></p>
  </body>
</html>
"#;

const STARTER_INDEX_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Articles</title>
  </head>
  <body>
    <h1>Topics</h1>
    <ul>
    {% for topic in topics %}
      <li>{{ topic }}</li>
    {% endfor %}
    </ul>
    <h1>Articles</h1>
    <ul>
    {% for article in articles %}
      <li><a href="{{ article.source_html }}">{{ article.title }}</a></li>
    {% endfor %}
    </ul>
  </body>
</html>
"#;

pub fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            std::fs::create_dir_all(&path)?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let default_config = SiteConfig {
        articles: vec![ArticleConfig {
            source: "welcome.md".into(),
            title: "Welcome".into(),
        }],
        topics: vec![serde_json::json!("general")],
        paths: Default::default(),
        templates: Default::default(),
        markdown: Default::default(),
    };

    println!("Initializing project in {}", path.display());

    let config_text = serde_json::to_string_pretty(&default_config)?;
    std::fs::write(path.join("config.json"), config_text)?;

    std::fs::create_dir_all(path.join("articles"))?;
    std::fs::write(path.join("articles").join("welcome.md"), STARTER_ARTICLE)?;

    std::fs::create_dir_all(path.join("templates"))?;
    std::fs::write(
        path.join("templates").join("article.html"),
        STARTER_ARTICLE_TEMPLATE,
    )?;
    std::fs::write(
        path.join("templates").join("index.html"),
        STARTER_INDEX_TEMPLATE,
    )?;

    println!(
        "Created config file {config_file}",
        config_file = path.join("config.json").display()
    );

    Ok(())
}
