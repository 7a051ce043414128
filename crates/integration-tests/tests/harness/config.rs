//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use httpwr_config::{HealthConfig, ServerConfig};

/// Builder for constructing test server configurations
pub struct ConfigBuilder {
    config: ServerConfig,
}

impl ConfigBuilder {
    /// Create a new builder bound to an ephemeral localhost port
    pub fn new() -> Self {
        Self {
            config: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                health: HealthConfig::default(),
            },
        }
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.health.enabled = false;
        self
    }

    /// Serve the health endpoint on a custom path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.health.path = path.to_owned();
        self
    }

    pub fn build(self) -> ServerConfig {
        self.config
    }
}
