//! Service configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file named by
//! `ADVISOR_CONFIG`, then `ADVISOR_*` environment variables.

use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "ADVISOR_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Name reported by the health endpoint
    pub service_name: String,
    pub bind_addr: String,
    /// Artificial latency before each chat reply
    pub response_delay_ms: u64,
    /// Chance that a viability question gets the positive answer
    pub positive_probability: f64,
    /// Fixed seed for reproducible answers; random per process when unset
    pub rng_seed: Option<u64>,
    pub cors_allowed_origins: Vec<String>,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "Advisor API".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            response_delay_ms: 1000,
            positive_probability: 0.7,
            rng_seed: None,
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads from the process environment.
    pub fn load() -> Result<Self> {
        let file = std::env::var(CONFIG_PATH_ENV).ok();
        Self::from_sources(file.as_deref().map(Path::new), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        debug!("Reading config file {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ADVISOR_SERVICE_NAME") {
            self.service_name = v;
        }
        if let Some(v) = lookup("ADVISOR_BIND_ADDR") {
            self.bind_addr = v;
        }
        if let Some(v) = lookup("ADVISOR_RESPONSE_DELAY_MS") {
            self.response_delay_ms = v
                .trim()
                .parse()
                .with_context(|| format!("ADVISOR_RESPONSE_DELAY_MS is not a number: {}", v))?;
        }
        if let Some(v) = lookup("ADVISOR_POSITIVE_PROBABILITY") {
            self.positive_probability = v
                .trim()
                .parse()
                .with_context(|| format!("ADVISOR_POSITIVE_PROBABILITY is not a number: {}", v))?;
        }
        if let Some(v) = lookup("ADVISOR_RNG_SEED") {
            self.rng_seed = Some(
                v.trim()
                    .parse()
                    .with_context(|| format!("ADVISOR_RNG_SEED is not an integer: {}", v))?,
            );
        }
        if let Some(v) = lookup("ADVISOR_CORS_ORIGINS") {
            self.cors_allowed_origins = v
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(v) = lookup("ADVISOR_LOG_DIR") {
            self.log_dir = v;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.positive_probability) {
            bail!(
                "positive_probability must be between 0 and 1, got {}",
                self.positive_probability
            );
        }
        for origin in &self.cors_allowed_origins {
            // credentialed CORS needs explicit origins
            if origin == "*" {
                bail!("cors_allowed_origins cannot contain `*` when credentials are allowed");
            }
            if !origin.is_ascii() || HeaderValue::from_str(origin).is_err() {
                bail!("cors_allowed_origins contains an invalid origin: {:?}", origin);
            }
        }
        Ok(())
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}
