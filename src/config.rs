use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    /// JSON list of leave policies served when a call brings none
    pub policy_catalog_path: Option<PathBuf>,

    // Rate limiting
    pub rate_evaluate_per_min: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").context("SERVER_ADDR must be set")?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            policy_catalog_path: env::var("POLICY_CATALOG_PATH").ok().map(PathBuf::from),
            rate_evaluate_per_min: env::var("RATE_EVALUATE_PER_MIN")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .context("RATE_EVALUATE_PER_MIN must be a whole number")?,
        })
    }
}
