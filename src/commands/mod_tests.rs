use std::cell::Cell;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::config::Config;

/// Records which entry point was used.
#[derive(Default)]
struct StubLoader {
    searched: Cell<bool>,
    explicit: Cell<bool>,
}

impl ConfigLoader for StubLoader {
    fn load(&self) -> Result<LoadResult> {
        self.searched.set(true);
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.explicit.set(true);
        Ok(LoadResult {
            config: Config::default(),
            source: Some(path.to_path_buf()),
        })
    }
}

#[test]
fn no_config_skips_loader() {
    let loader = StubLoader::default();
    let result = load_config_with(&loader, None, true).unwrap();

    assert_eq!(result, LoadResult::defaults());
    assert!(!loader.searched.get());
    assert!(!loader.explicit.get());
}

#[test]
fn explicit_path_bypasses_search() {
    let loader = StubLoader::default();
    let result = load_config_with(&loader, Some(Path::new("x.toml")), false).unwrap();

    assert_eq!(result.source, Some(PathBuf::from("x.toml")));
    assert!(loader.explicit.get());
    assert!(!loader.searched.get());
}

#[test]
fn default_search_without_path() {
    let loader = StubLoader::default();
    load_config_with(&loader, None, false).unwrap();
    assert!(loader.searched.get());
}

#[test]
fn exit_codes_by_error_class() {
    assert_eq!(
        exit_code_for(&ElemTallyError::Config("bad".to_string())),
        EXIT_CONFIG_ERROR
    );
    assert_eq!(
        exit_code_for(&ElemTallyError::UnknownEncoding("x".to_string())),
        EXIT_CONFIG_ERROR
    );
    assert_eq!(
        exit_code_for(&ElemTallyError::Chart("no font".to_string())),
        EXIT_RUNTIME_ERROR
    );
    assert_eq!(
        exit_code_for(&ElemTallyError::Io(std::io::Error::other("disk"))),
        EXIT_RUNTIME_ERROR
    );
}

#[test]
fn write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let mut out = Vec::new();

    write_output(Some(&path), "hello\n", false, &mut out).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    assert!(out.is_empty());
}

#[test]
fn write_output_without_path_uses_writer() {
    let mut out = Vec::new();
    write_output(None, "hello\n", false, &mut out).unwrap();
    assert_eq!(out, b"hello\n");
}

#[test]
fn write_output_quiet_suppresses_writer_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let mut out = Vec::new();

    write_output(None, "hello\n", true, &mut out).unwrap();
    assert!(out.is_empty());

    write_output(Some(&path), "hello\n", true, &mut out).unwrap();
    assert!(path.exists());
}

#[test]
fn write_output_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("report.txt");

    let err = write_output(Some(&path), "x", false, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, ElemTallyError::FileWrite { .. }));
}
