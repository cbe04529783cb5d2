//! Server configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional YAML file, `DRIFTCODEC_*` environment variables, and command-line
//! flags (applied by the binary).

use anyhow::{Context, Result};
use driftcodec_observability::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest number of hex strings accepted in one request
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
    /// Records per batch-engine chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Request body limit in bytes; derived from `max_batch` when unset
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 12_345 }
fn default_max_batch() -> usize { 100_000 }
fn default_chunk_size() -> usize { 10_000 }

/// Bytes allowed per hex entry when deriving the body limit.
const BODY_BYTES_PER_ENTRY: usize = 64;
/// Never go below axum's stock limit.
const MIN_BODY_BYTES: usize = 2 * 1024 * 1024;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_batch: default_max_batch(),
            chunk_size: default_chunk_size(),
            max_body_bytes: None,
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from a YAML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("read config file '{}'", p.display()))?;
                Self::from_yaml(&text).with_context(|| format!("parse config file '{}'", p.display()))
            }
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply `DRIFTCODEC_HOST`, `DRIFTCODEC_PORT` and `DRIFTCODEC_MAX_BATCH`.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("DRIFTCODEC_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("DRIFTCODEC_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("invalid DRIFTCODEC_PORT '{port}'"))?;
        }
        if let Some(max) = lookup("DRIFTCODEC_MAX_BATCH") {
            self.max_batch = max
                .parse()
                .with_context(|| format!("invalid DRIFTCODEC_MAX_BATCH '{max}'"))?;
        }
        Ok(self)
    }

    /// Largest request body the router buffers.
    pub fn body_limit(&self) -> usize {
        self.max_body_bytes.unwrap_or_else(|| {
            self.max_batch
                .saturating_mul(BODY_BYTES_PER_ENTRY)
                .max(MIN_BODY_BYTES)
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
