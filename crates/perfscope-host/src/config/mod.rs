//! Host config loader (strict parsing).

pub mod schema;

use std::fs;

use perfscope_core::error::{ProfilerError, Result};

pub use schema::{HostSection, ProfilerConfig, RegistrySection};

/// Config path used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "perfscope.yaml";

pub fn load_from_file(path: &str) -> Result<ProfilerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ProfilerError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ProfilerConfig> {
    let cfg: ProfilerConfig = serde_yaml::from_str(s)
        .map_err(|e| ProfilerError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
