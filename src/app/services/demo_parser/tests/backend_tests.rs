//! Tests for the external backend process adapter

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::Error;
use crate::app::services::demo_parser::{DemoBackend, ExternalBackend};

/// Helper to create a temporary stand-in demo file
fn create_temp_demo() -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".dem")
        .tempfile()
        .unwrap();
    temp_file.write_all(b"HL2DEMO\0").unwrap();
    temp_file
}

#[cfg(unix)]
fn create_fake_parser(dir: &Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-demoparser");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn test_missing_demo_file_is_reported_before_launch() {
    let backend = ExternalBackend::default();

    let err = backend
        .parse_demo(Path::new("/nonexistent/default.dem"), 128)
        .unwrap_err();

    assert!(matches!(err, Error::DemoNotFound { .. }));
}

#[test]
fn test_missing_executable_is_a_launch_error() {
    let demo = create_temp_demo();
    let backend = ExternalBackend::new("/nonexistent/bin/csgo-demoparser");

    let err = backend.parse_demo(demo.path(), 128).unwrap_err();

    assert!(matches!(err, Error::BackendLaunch { .. }));
}

#[cfg(unix)]
#[test]
fn test_successful_parse_decodes_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let demo = create_temp_demo();
    let program = create_fake_parser(
        dir.path(),
        r#"echo '{"mapName":"de_dust2","gameRounds":[{"roundNum":1,"frames":[{"tick":64}]}]}'"#,
    );

    let backend = ExternalBackend::new(&program);
    let data = backend.parse_demo(demo.path(), 64).unwrap();

    assert_eq!(data.get("mapName"), Some(&serde_json::json!("de_dust2")));
    assert_eq!(data.game_rounds().map(Vec::len), Some(1));
}

#[cfg(unix)]
#[test]
fn test_backend_receives_demo_and_rate_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let demo = create_temp_demo();

    // Echo the received argument vector back as the payload.
    let program = create_fake_parser(
        dir.path(),
        r#"printf '{"argDemoFlag":"%s","argDemo":"%s","argRateFlag":"%s","argRate":%s}' "$1" "$2" "$3" "$4""#,
    );

    let backend = ExternalBackend::new(&program);
    let data = backend.parse_demo(demo.path(), 32).unwrap();

    assert_eq!(data.get("argDemoFlag"), Some(&serde_json::json!("--demo")));
    assert_eq!(
        data.get("argDemo"),
        Some(&serde_json::json!(demo.path().display().to_string()))
    );
    assert_eq!(
        data.get("argRateFlag"),
        Some(&serde_json::json!("--parse-rate"))
    );
    assert_eq!(data.get("argRate"), Some(&serde_json::json!(32)));
}

#[cfg(unix)]
#[test]
fn test_nonzero_exit_carries_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let demo = create_temp_demo();
    let program = create_fake_parser(dir.path(), "echo 'unsupported demo version' >&2; exit 2");

    let backend = ExternalBackend::new(&program);
    let err = backend.parse_demo(demo.path(), 128).unwrap_err();

    match err {
        Error::BackendFailed { stderr, .. } => {
            assert!(stderr.contains("unsupported demo version"));
        }
        other => panic!("expected BackendFailed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_non_json_stdout_is_invalid_output() {
    let dir = tempfile::tempdir().unwrap();
    let demo = create_temp_demo();
    let program = create_fake_parser(dir.path(), "echo 'this is not json'");

    let backend = ExternalBackend::new(&program);
    let err = backend.parse_demo(demo.path(), 128).unwrap_err();

    assert!(matches!(err, Error::InvalidOutput { .. }));
}

#[cfg(unix)]
#[test]
fn test_non_object_json_is_invalid_output() {
    let dir = tempfile::tempdir().unwrap();
    let demo = create_temp_demo();
    let program = create_fake_parser(dir.path(), "echo '[1, 2, 3]'");

    let backend = ExternalBackend::new(&program);
    let err = backend.parse_demo(demo.path(), 128).unwrap_err();

    assert!(matches!(err, Error::InvalidOutput { .. }));
}

#[test]
fn test_default_backend_program_name() {
    let backend = ExternalBackend::default();
    assert_eq!(
        backend.program(),
        Path::new(crate::constants::DEFAULT_PARSER_BIN)
    );
}
