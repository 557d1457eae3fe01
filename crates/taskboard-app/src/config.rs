use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "taskboard.toml";

const MAX_RESPONSE_DELAY_MS: u64 = 10_000;

/// Top-level configuration loaded from `taskboard.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// HTTP gateway settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl ProjectConfig {
    /// Load configuration from an explicit file, or from `taskboard.toml` in `workdir`.
    ///
    /// An explicit path must exist; the implicit file falls back to defaults when missing.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read, parsed or fails validation.
    pub fn load(explicit: Option<&Path>, workdir: impl AsRef<Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_workdir(workdir),
        }
    }

    /// Load configuration from a known working directory.
    ///
    /// # Errors
    /// Returns an error when an existing file cannot be read, parsed or validated.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&config_path)
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns an error naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to render configuration")
    }

    /// Resolve the implicit configuration path for `workdir`.
    pub fn default_path(workdir: impl AsRef<Path>) -> PathBuf {
        workdir.as_ref().join(CONFIG_FILE)
    }
}

/// `[server]` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Artificial latency added to `/api/tasks` responses; 0 disables.
    pub response_delay_ms: u64,
    /// Send permissive CORS headers.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3001,
            response_delay_ms: 300,
            cors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        if self.port == 0 {
            bail!("server.port must be between 1 and 65535");
        }
        if self.response_delay_ms > MAX_RESPONSE_DELAY_MS {
            bail!(
                "server.response_delay_ms must be at most {MAX_RESPONSE_DELAY_MS}, got {}",
                self.response_delay_ms
            );
        }
        Ok(())
    }
}

/// `[store]` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Pre-load the six sample tasks on start.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}
