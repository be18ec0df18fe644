use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use partquote::config::{self, Config};

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Base URL".cyan(), cfg.api.base_url);
    println!("  {}: {}", "API Keys".cyan(), cfg.api.api_keys.len());
    println!(
        "  {}: {} ms",
        "Request Delay".cyan(),
        cfg.api.request_delay_ms
    );
    println!(
        "  {}: {} (cooldown {} ms)",
        "Max 429 Retries".cyan(),
        cfg.api.retry.max_attempts,
        cfg.api.retry.cooldown_ms
    );

    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    for key in &mut sanitized.api.api_keys {
        *key = mask_api_key(key);
    }
    sanitized
}

/// Mask an API key for safe display
///
/// Shows first 7 and last 4 characters with asterisks in between
/// Example: "05956b6a-cac3-4d4d-b103" -> "05956b6...b103"
fn mask_api_key(key: &str) -> String {
    if key.len() <= 11 {
        // Too short to mask meaningfully
        return "***".to_string();
    }

    let prefix = &key[..7];
    let suffix = &key[key.len() - 4..];

    format!("{}...{}", prefix, suffix)
}
