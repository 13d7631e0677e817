#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the elem-tally binary.
#[macro_export]
macro_rules! elem_tally {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("elem-tally"))
    };
}

/// GBK encoding of "中文".
pub const GBK_CHINESE: [u8; 4] = [0xD6, 0xD0, 0xCE, 0xC4];

pub const SAMPLE_FORMULAS: &str = "FeCo2NiAl\nxyz123\nFeCoFe\nYb2O3\n";

/// Temporary working directory for one test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".elem-tally.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// Command running inside the fixture, isolated from the user's own
    /// configuration directory and terminal settings.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = elem_tally!();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.join(".config"))
            .env("APPDATA", self.join("AppData"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
