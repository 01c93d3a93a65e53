//! Site building: article enrichment, rendering, and output writing.
//!
//! The build is a strict linear pipeline:
//! 1. Enrich configured articles with their derived output filenames
//! 2. Load the article and index templates
//! 3. Render and write each article page, in configured order
//! 4. Render and write the index page
//!
//! Any failure aborts the run; output written by earlier steps stays on
//! disk, and re-running overwrites every file by path.

mod article;
mod builder;
mod markdown;
mod paths;
mod render;

pub use builder::{BuildError, BuildResult, Builder};
pub use paths::base_path_from_config;
