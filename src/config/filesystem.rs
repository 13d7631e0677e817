//! Filesystem access used by the config loader, mockable in tests.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user configuration directory:
    /// - Linux: `~/.config/elem-tally`
    /// - macOS: `~/Library/Application Support/elem-tally`
    /// - Windows: `%APPDATA%\elem-tally\config`
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "elem-tally")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
