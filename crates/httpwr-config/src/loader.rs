use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is not absolute or the log filter
    /// is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        if self.telemetry.log_filter.trim().is_empty() {
            anyhow::bail!("telemetry.log_filter must not be empty");
        }

        Ok(())
    }
}
