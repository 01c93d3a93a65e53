use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::SiteConfig,
};

pub fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    // Determine the config file path
    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(|| "config.json".into());
    let config_path = if config_path.is_relative() {
        std::env::current_dir()?.join(&config_path)
    } else {
        config_path
    };

    let config = SiteConfig::load_from_arg(Some(config_path.as_path()))?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    // Build the site
    let builder = Builder::new(config, base_path);
    let result = builder.build()?;

    println!(
        "Built site to {} ({} article page(s) plus the index)",
        result.output_dir.display(),
        result.articles
    );

    Ok(())
}
