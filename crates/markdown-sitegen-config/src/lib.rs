use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout. Every field is optional in the file and falls back to the
/// conventional name next to the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    pub const DEFAULT_FILE_NAME: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// The config file in the current working directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::DEFAULT_FILE_NAME)
    }

    /// Anchor relative paths at `base`, usually the config file's directory.
    pub fn resolve(self, base: &Path) -> Self {
        let anchor = |path: PathBuf| {
            if path.is_relative() {
                base.join(path)
            } else {
                path
            }
        };
        Self {
            content_dir: anchor(self.content_dir),
            static_dir: anchor(self.static_dir),
            public_dir: anchor(self.public_dir),
            template: anchor(self.template),
        }
    }

    // Expand shell variables and tilde in every configured path
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            content_dir: expand(self.content_dir),
            static_dir: expand(self.static_dir),
            public_dir: expand(self.public_dir),
            template: expand(self.template),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
