use std::path::PathBuf;

use super::*;
use crate::error::DecodeFailure;

fn render(out: &ErrorOutput, err: &ElemTallyError) -> String {
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        err.error_type(),
        &err.message(),
        err.detail().as_deref(),
        err.suggestion(),
    );
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Config", "dpi must be positive", None, None);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "✖ Config: dpi must be positive\n"
    );
}

#[test]
fn undetectable_encoding_block() {
    let err = ElemTallyError::UndetectableEncoding {
        path: PathBuf::from("alloys.txt"),
        source: DecodeFailure {
            tried: vec!["UTF-8".to_string(), "GBK".to_string()],
        },
    };
    let text = render(&ErrorOutput::with_colors(false), &err);

    assert!(text.starts_with("✖ Encoding: cannot determine the encoding of alloys.txt\n"));
    assert!(text.contains("  × no candidate encoding could decode the input (tried: UTF-8, GBK)\n"));
    assert!(text.contains("  help: check the file's encoding manually"));
}

#[test]
fn error_with_colors_uses_ansi() {
    let err = ElemTallyError::Chart("no usable font".to_string());
    let text = render(&ErrorOutput::with_colors(true), &err);

    assert!(text.contains("\x1b[1m\x1b[31m✖ Chart:\x1b[0m no usable font"));
    assert!(text.contains("\x1b[36mhelp:\x1b[0m"));
}

#[test]
fn warning_without_colors() {
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "chart skipped");
    assert_eq!(String::from_utf8(buf).unwrap(), "⚠ Warning: chart skipped\n");
}

#[test]
fn explicit_modes_override_detection() {
    assert!(ErrorOutput::new(ColorMode::Always).use_colors);
    assert!(!ErrorOutput::new(ColorMode::Never).use_colors);
}
