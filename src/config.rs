//! Configuration
//!
//! Loaded from `--config PATH`, `~/.config/postbox-mcp/postbox-mcp.yml` or
//! `./postbox-mcp.yml`, falling back to defaults.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    /// Write diagnostics here instead of stderr
    pub log_file: Option<PathBuf>,
    pub server: ServerConfig,
    pub transport: TransportConfig,
}

/// Identity reported in the `initialize` handshake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "mcp-server/simple-demo".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            protocol_version: "2024-11-05".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Longest accepted inbound line, in bytes
    pub max_message_bytes: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            log_file: None,
            server: ServerConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

/// Configuration plus what happened while finding it.
///
/// Loading runs before the logger exists, so notes are handed back for the
/// caller to log once it does.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Candidate files that existed but could not be loaded
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            let config =
                Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.clone()),
                warnings: Vec::new(),
            });
        }

        Ok(Self::load_first(&Self::candidates()))
    }

    /// Default search order: ~/.config/<project>/<project>.yml, then ./<project>.yml
    fn candidates() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let file_name = format!("{}.yml", project_name);

        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(project_name).join(&file_name));
        }
        candidates.push(PathBuf::from(file_name));
        candidates
    }

    /// First candidate that exists and parses; broken ones are skipped with a warning
    fn load_first(candidates: &[PathBuf]) -> LoadedConfig {
        let mut warnings = Vec::new();

        for candidate in candidates.iter().filter(|path| path.exists()) {
            match Self::load_from_file(candidate) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(candidate.clone()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Failed to load config from {}: {:#}", candidate.display(), e)),
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            warnings,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Effective log level: `verbose` wins, then the configured level
    pub fn effective_log_level(&self, verbose: bool) -> &str {
        if verbose {
            "debug"
        } else {
            self.log_level.as_deref().unwrap_or("info")
        }
    }
}
