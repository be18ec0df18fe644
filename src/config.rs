use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the distributor API, without the search path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Credential pool, rotated round-robin across requests
    pub api_keys: Vec<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Minimum spacing between any two outbound requests
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Retries after the first attempt when the server answers 429
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Cooldown slept before each 429 retry
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_result_file")]
    pub result_file: String,
    #[serde(default = "default_template_file")]
    pub template_file: String,
}

fn default_base_url() -> String {
    "https://api.mouser.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_cooldown_ms() -> u64 {
    5000
}

fn default_result_file() -> String {
    "part_prices.xlsx".to_string()
}

fn default_template_file() -> String {
    "part_list_template.csv".to_string()
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_file: default_result_file(),
            template_file: default_template_file(),
        }
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("PARTQUOTE").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.api.api_keys.is_empty() {
        anyhow::bail!("At least one API key must be configured");
    }

    if cfg.api.api_keys.iter().any(|k| k.trim().is_empty()) {
        anyhow::bail!("API keys cannot be blank");
    }

    if cfg.api.base_url.is_empty() {
        anyhow::bail!("API base URL cannot be empty");
    }

    if cfg.api.timeout_seconds == 0 {
        anyhow::bail!("Request timeout must be at least one second");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> Config {
        Config {
            api: ApiConfig {
                base_url: default_base_url(),
                api_keys: vec!["key-a".to_string()],
                timeout_seconds: default_timeout_seconds(),
                request_delay_ms: default_request_delay_ms(),
                retry: RetryConfig::default(),
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = minimal_config();
        assert_eq!(cfg.api.timeout_seconds, 30);
        assert_eq!(cfg.api.request_delay_ms, 1000);
        assert_eq!(cfg.api.retry.max_attempts, 3);
        assert_eq!(cfg.api.retry.cooldown_ms, 5000);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_rejects_empty_key_pool() {
        let mut cfg = minimal_config();
        cfg.api.api_keys.clear();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_rejects_blank_key() {
        let mut cfg = minimal_config();
        cfg.api.api_keys.push("   ".to_string());
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_minimal_toml_round_trip() {
        let toml_src = r#"
            [api]
            api_keys = ["key-a", "key-b"]
        "#;
        let cfg: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(cfg.api.api_keys.len(), 2);
        assert_eq!(cfg.api.base_url, "https://api.mouser.com");
        assert_eq!(cfg.output.result_file, "part_prices.xlsx");
    }
}
