use crate::{CleanArgs, build::base_path_from_config, config::SiteConfig};

pub fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
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

    // Delete the generated site folder
    let site_path = base_path.join(&config.paths.output);
    let site_path = site_path.canonicalize().unwrap_or(site_path);
    if site_path.exists() {
        if args.dry_run {
            println!("Would delete {}", site_path.display());
        } else {
            std::fs::remove_dir_all(&site_path)?;
            println!("Deleted {}", site_path.display());
        }
    }

    Ok(())
}
