use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use partquote::{config, export};

/// Execute the template command
///
/// Writes a blank part-list input template with sample rows.
pub fn execute(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    // The config file is optional here; fall back to defaults if absent.
    let template_file = match config::load_config(config_path) {
        Ok(cfg) => cfg.output.template_file,
        Err(_) => "part_list_template.csv".to_string(),
    };

    let path = output.unwrap_or_else(|| PathBuf::from(template_file));
    export::write_template(&path)?;

    info!(path = %path.display(), "template created");
    println!("{} {}", "✓ Template written to".green(), path.display());
    Ok(())
}
