use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use riecount_core::error::{Result, RiecountError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RiecountError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RiecountError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_counter_file")]
    pub counter_file: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self { counter_file: default_counter_file() }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.counter_file.trim().is_empty() {
            return Err(RiecountError::BadRequest("store.counter_file must not be empty".into()));
        }
        Ok(())
    }

    /// Relative paths resolve against the working directory.
    pub fn counter_path(&self) -> PathBuf {
        PathBuf::from(&self.counter_file)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_counter_file() -> String {
    "counter.json".into()
}
