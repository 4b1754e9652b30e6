use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default so the service boots with no env at all;
/// a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub esco_base_url: String,
    pub subjects_file: PathBuf,
    pub salary_file: PathBuf,
    pub cache_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            esco_base_url: env_or("ESCO_API_BASE_URL", "https://ec.europa.eu/esco/api"),
            subjects_file: env_or("SUBJECT_MAPPING_FILE", "data/subjects_mapping.json").into(),
            salary_file: env_or("SALARY_DATA_FILE", "data/salary_data.json").into(),
            cache_ttl_secs: env_or("CACHE_TTL_SECONDS", "3600")
                .parse::<u64>()
                .context("CACHE_TTL_SECONDS must be a non-negative integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Default `EnvFilter` directive scoped to this crate. Tracing targets use
/// the underscored crate name, not the hyphenated package name, so the
/// package name must be folded before it can match any event.
pub fn default_log_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}
