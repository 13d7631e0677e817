use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::{Config, validate_config_semantics};

#[test]
fn template_parses_to_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
    validate_config_semantics(&config).unwrap();
}

#[test]
fn template_documents_every_section() {
    let template = generate_config_template();
    for section in ["[symbols]", "[encoding]", "[output]", "[chart]"] {
        assert!(template.contains(section), "missing {section}");
    }
    assert!(template.contains("# list = "));
    assert!(template.contains("# font = "));
}

#[test]
fn creates_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".elem-tally.toml");

    run_init_impl(&InitArgs {
        output: path.clone(),
        force: false,
    })
    .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), generate_config_template());
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".elem-tally.toml");
    fs::write(&path, "# mine\n").unwrap();

    let err = run_init_impl(&InitArgs {
        output: path.clone(),
        force: false,
    })
    .unwrap_err();

    assert!(err.is_config_error());
    assert!(err.message().contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn force_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".elem-tally.toml");
    fs::write(&path, "# mine\n").unwrap();

    run_init_impl(&InitArgs {
        output: path.clone(),
        force: true,
    })
    .unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("[symbols]"));
}

#[test]
fn unwritable_destination_is_write_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("cfg.toml");

    let err = run_init_impl(&InitArgs {
        output: path,
        force: false,
    })
    .unwrap_err();

    assert!(matches!(err, ElemTallyError::FileWrite { .. }));
}
