//! Server config loader (strict parsing).
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - YAML file at `$RIECOUNT_CONFIG` (default `riecount.yaml`), if it exists
//! - `$COUNTER_FILE` for the store path

pub mod schema;

use std::fs;
use std::io;
use std::path::Path;

use riecount_core::error::{Result, RiecountError};

pub use schema::{ServerConfig, ServerSection, StoreSection};

pub const CONFIG_PATH_ENV: &str = "RIECOUNT_CONFIG";
pub const COUNTER_FILE_ENV: &str = "COUNTER_FILE";
pub const DEFAULT_CONFIG_PATH: &str = "riecount.yaml";

/// Load config from the process environment.
pub fn load_from_env() -> Result<ServerConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let counter_file = std::env::var(COUNTER_FILE_ENV).ok();
    load_with_overrides(Path::new(&path), counter_file)
}

/// Load `path` if present (defaults otherwise), then apply the counter file override.
pub fn load_with_overrides(path: &Path, counter_file: Option<String>) -> Result<ServerConfig> {
    let mut cfg = match fs::read_to_string(path) {
        Ok(s) => parse(&s)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => ServerConfig::default(),
        Err(e) => {
            return Err(RiecountError::Internal(format!(
                "read config {} failed: {e}",
                path.display()
            )))
        }
    };
    if let Some(file) = counter_file {
        cfg.store.counter_file = file;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<ServerConfig> {
    serde_yaml::from_str(s).map_err(|e| RiecountError::BadRequest(format!("invalid yaml: {e}")))
}
