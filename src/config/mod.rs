// src/config/mod.rs
pub mod types;

pub use self::types::{Config, EngineConfig, InputConfig, OutputConfig, ShortpathToml};

use crate::error::{Result, ShortpathError};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "shortpath.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `shortpath.toml` body.
    ///
    /// # Errors
    /// Returns `Config` if the TOML is invalid or has unknown keys.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: ShortpathToml = toml::from_str(content)?;
        Ok(parsed.into())
    }

    /// Loads `path`, or `shortpath.toml` in the current directory when no path
    /// is given. Only the implicit file may be absent.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing, unreadable, or invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|source| ShortpathError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Strategy;

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.strategy, Strategy::Linear);
        assert_eq!(config.render.separator, "->");
        assert!(config.delimiters.contains(':'));
        assert!(config.color);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = Config::parse_toml("[bogus]\nx = 1\n").unwrap_err();
        assert!(matches!(err, ShortpathError::Config(_)));
    }
}
