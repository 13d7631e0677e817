use std::path::{Path, PathBuf};

use crate::error::{ElemTallyError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};
use super::validation::validate_config_semantics;

pub const LOCAL_CONFIG_NAME: &str = ".elem-tally.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, malformed or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.elem-tally.toml` in the current directory
/// 2. `config.toml` in the platform config directory (see [`FileSystem::config_dir`])
/// 3. `Config::default()`
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Paths searched by [`ConfigLoader::load`], in priority order.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.search_paths() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
            log::debug!("no config at {}", path.display());
        }
        log::debug!("using built-in configuration");
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.exists(path) {
            return Err(ElemTallyError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ElemTallyError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let config = Self::parse_config(&content)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
