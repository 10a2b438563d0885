//! Configuration for madlib

use eyre::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name searched for in the config directory and the working directory
pub const CONFIG_FILE_NAME: &str = "madlib.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Template to play
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Directory that completed stories are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_template_path() -> PathBuf {
    PathBuf::from(crate::DEFAULT_TEMPLATE_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::DEFAULT_OUTPUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            output_dir: default_output_dir(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!(path = %config_path.display(), "Config::load: explicit path");
            return Self::load_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("madlib").join(CONFIG_FILE_NAME)),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "Config::load: found default config");
                return Self::load_file(path);
            }
        }

        debug!("Config::load: no config file, using defaults");
        Ok(Config::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, template: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(template) = template {
            self.template_path = template;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }
}
