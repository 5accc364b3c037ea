/*!
 * Simulation Configuration
 * Layered configuration: defaults, JSON file, environment, command line
 *
 * Environment variables:
 * - MEMSIM_TOTAL_MEMORY: size of the address space (default: 1024)
 * - MEMSIM_POLICY: first-fit | best-fit (default: first-fit)
 * - MEMSIM_TRACE_JSON: enable JSON log output (default: false)
 */

use super::limits::DEFAULT_TOTAL_MEMORY;
use super::types::Size;
use crate::memory::AllocationPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_TOTAL_MEMORY: &str = "MEMSIM_TOTAL_MEMORY";
pub const ENV_POLICY: &str = "MEMSIM_POLICY";
pub const ENV_TRACE_JSON: &str = "MEMSIM_TRACE_JSON";

/// Configuration result
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Total memory must be a positive integer, got {0}")]
    InvalidTotalMemory(String),

    #[error("Unknown allocation policy: {0} (expected first-fit or best-fit)")]
    UnknownPolicy(String),

    #[error("Unknown command-line argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulationConfig {
    /// Size of the contiguous address space
    pub total_memory: Size,
    /// Policy used when no policy is named explicitly
    pub policy: AllocationPolicy,
    /// Emit JSON-formatted logs
    pub trace_json: bool,
    /// Descriptor file to load at startup
    pub load: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_memory: DEFAULT_TOTAL_MEMORY,
            policy: AllocationPolicy::FirstFit,
            trace_json: false,
            load: None,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn with_env(self) -> ConfigResult<Self> {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary environment lookup
    pub fn with_env_lookup<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TOTAL_MEMORY) {
            self.total_memory = parse_total_memory(&value)?;
        }
        if let Some(value) = lookup(ENV_POLICY) {
            self.policy = value.parse()?;
        }
        if let Some(value) = lookup(ENV_TRACE_JSON) {
            self.trace_json = value == "1" || value.eq_ignore_ascii_case("true");
        }
        Ok(self)
    }

    /// Overlay values from command-line arguments (program name already stripped)
    ///
    /// Accepted: `--memory N`, `--policy first-fit|best-fit`, `--load FILE`,
    /// `--json-logs`, `--config FILE` (file values are applied in place).
    pub fn with_args<I, S>(mut self, args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--memory" | "-m" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                    self.total_memory = parse_total_memory(&value)?;
                }
                "--policy" | "-p" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                    self.policy = value.parse()?;
                }
                "--load" | "-l" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                    self.load = Some(PathBuf::from(value));
                }
                "--config" | "-c" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                    self = Self::from_json_file(value)?;
                }
                "--json-logs" => self.trace_json = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.total_memory == 0 {
            return Err(ConfigError::InvalidTotalMemory("0".to_string()));
        }
        Ok(())
    }
}

fn parse_total_memory(value: &str) -> ConfigResult<Size> {
    match value.trim().parse::<Size>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidTotalMemory(value.to_string())),
    }
}
