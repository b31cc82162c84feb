use std::path::{Path, PathBuf};

use crate::error::{Result, StyleAuditError};

use super::AuditConfig;
use super::model::CONFIG_VERSION;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<AuditConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<AuditConfig>;
}

pub const LOCAL_CONFIG_NAME: &str = ".style-audit.toml";
const USER_CONFIG_NAME: &str = "config.toml";

fn validate_config_version(config: &AuditConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(StyleAuditError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the platform-specific configuration directory for style-audit.
    ///
    /// - Windows: `%APPDATA%\style-audit`
    /// - macOS: `~/Library/Application Support/style-audit`
    /// - Linux: `~/.config/style-audit` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "style-audit")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.style-audit.toml` in the project directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `AuditConfig::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
    project_dir: PathBuf,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs: RealFileSystem,
            project_dir: project_dir.into(),
        }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub fn with_fs(fs: F, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            project_dir: project_dir.into(),
        }
    }

    fn local_config_path(&self) -> PathBuf {
        self.project_dir.join(LOCAL_CONFIG_NAME)
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    /// Returns an error on invalid TOML or an unsupported `version`.
    pub fn parse_config(content: &str) -> Result<AuditConfig> {
        let config: AuditConfig = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<AuditConfig> {
        let local = self.local_config_path();
        if self.fs.exists(&local) {
            return self.load_from_path(&local);
        }

        if let Some(user) = self.user_config_path()
            && self.fs.exists(&user)
        {
            return self.load_from_path(&user);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(AuditConfig::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<AuditConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| StyleAuditError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "loaded config");
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
