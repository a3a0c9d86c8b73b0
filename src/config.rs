use dotenvy::dotenv;
use log::{error, info};
use std::{env as stdenv, path::Path};

use crate::checkout::DEFAULT_PAYMENT_BASE_URL;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8081";
pub const DEFAULT_SITE_URL: &str = "https://mz1312.xx.kg";
pub const DEFAULT_CORS_FILE: &str = ".env_cors";

/// Server settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: String,
    /// Absolute origin used for canonical links and structured data.
    pub site_url: String,
    pub payment_base_url: String,
    pub cors_file: String,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            host: load_env_var("HOST", DEFAULT_HOST),
            port: load_env_var("PORT", DEFAULT_PORT),
            site_url: load_env_var("SITE_URL", DEFAULT_SITE_URL)
                .trim_end_matches('/')
                .to_string(),
            payment_base_url: load_env_var("PAYMENT_BASE_URL", DEFAULT_PAYMENT_BASE_URL),
            cors_file: load_env_var("CORS_FILE", DEFAULT_CORS_FILE),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            payment_base_url: DEFAULT_PAYMENT_BASE_URL.to_string(),
            cors_file: DEFAULT_CORS_FILE.to_string(),
        }
    }
}

/// Loads `.env` from the working directory; a missing file is logged, not fatal.
pub fn load_env_file() {
    let current_dir = stdenv::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let env_path = current_dir.join(".env");

    if dotenv().is_err() {
        error!(
            ".env file not found. Expected it at: {}",
            env_path.display()
        );
    } else {
        info!(".env loading at: {}", env_path.display());
    }
}

/// `key` from the environment, or `default` when unset or blank.
pub fn load_env_var(key: &str, default: &str) -> String {
    match stdenv::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
