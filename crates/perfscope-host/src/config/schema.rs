use std::net::SocketAddr;

use serde::Deserialize;
use perfscope_core::error::{ProfilerError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilerConfig {
    pub version: u32,

    #[serde(default)]
    pub host: HostSection,

    #[serde(default)]
    pub registry: RegistrySection,
}

impl ProfilerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ProfilerError::UnsupportedVersion);
        }
        self.host.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl HostSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            ProfilerError::BadRequest(format!(
                "host.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:7070".into()
}

/// Registry behavior exposed through the HTTP surface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// When true, stopping a label with no pending start answers 404
    /// instead of the lenient 204.
    #[serde(default)]
    pub strict_stop: bool,
}
