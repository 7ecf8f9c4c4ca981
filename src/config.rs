//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `JWT_SECRET` - HS256 secret shared with the login service that issues bearer tokens
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ADMIN_USER_IDS` - Comma-separated ids of users allowed to edit content
//! - `UPLOAD_DIR` - Directory for uploaded images (default: `uploads`)
//! - `MAX_UPLOAD_BYTES` - Request body limit in bytes (default: 5 MiB)
//! - `MARKET_DATA_PATH` - JSON snapshot with coin rates and investment plans
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! export ADMIN_USER_IDS="64f1c2a9e4b0a1b2c3d4e5f6,64f1c2a9e4b0a1b2c3d4e5f7"
//! export MARKET_DATA_PATH="./market.json"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const MIN_UPLOAD_BYTES: usize = 1024;
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HS256 secret used to verify bearer tokens. Loaded from `JWT_SECRET`.
    pub jwt_secret: String,
    /// Users allowed to call the create endpoints.
    pub admin_user_ids: Vec<String>,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Maximum accepted request body, multipart uploads included.
    pub max_upload_bytes: usize,
    /// Optional coin rates / investment plans snapshot.
    pub market_data_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let admin_user_ids = env::var("ADMIN_USER_IDS")
            .map(|v| parse_id_list(&v))
            .unwrap_or_default();

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5 * 1024 * 1024);

        let market_data_path = env::var("MARKET_DATA_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            jwt_secret,
            admin_user_ids,
            upload_dir,
            max_upload_bytes,
            market_data_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `jwt_secret` is empty
    /// - `max_upload_bytes` is outside 1 KiB ..= 50 MiB
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.jwt_secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        if !(MIN_UPLOAD_BYTES..=MAX_UPLOAD_BYTES).contains(&self.max_upload_bytes) {
            anyhow::bail!(
                "MAX_UPLOAD_BYTES must be between {} and {}, got {}",
                MIN_UPLOAD_BYTES,
                MAX_UPLOAD_BYTES,
                self.max_upload_bytes
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Admin users: {}", self.admin_user_ids.len());
        tracing::info!("  Upload dir: {}", self.upload_dir.display());
        tracing::info!("  Max upload: {} bytes", self.max_upload_bytes);

        match &self.market_data_path {
            Some(path) => tracing::info!("  Market data: {}", path.display()),
            None => tracing::info!("  Market data: none (empty lists)"),
        }

        if self.admin_user_ids.is_empty() {
            tracing::warn!("ADMIN_USER_IDS is empty; every create endpoint will answer 403");
        }
    }
}

/// Splits a comma-separated id list, dropping blanks and surrounding spaces.
fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
