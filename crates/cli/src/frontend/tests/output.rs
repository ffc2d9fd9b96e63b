use std::io::{self, Write};

use test_support::{scratch_dir, write_file, xattrs_supported};

use super::common::{run_with_args, run_with_env};
use crate::ExitCode;

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_with_args(["integrity", "--help"]);
    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert!(stdout.contains("Usage: integrity [OPTIONS] PATH..."));
    assert!(stdout.contains("--display-format"));
    assert!(stdout.contains("blake2b_512"));
}

#[test]
fn version_prints_package_version() {
    let (code, stdout, _) = run_with_args(["integrity", "--version"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage_to_stderr() {
    let (code, stdout, stderr) = run_with_args(["integrity"]);
    assert_eq!(code, ExitCode::NoArguments.as_i32());
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("Error : no arguments given\n"));
    assert!(stderr.contains("Usage: integrity"));
}

#[test]
fn syntax_error_exits_one() {
    let (code, _, stderr) = run_with_args(["integrity", "--no-such-option", "f"]);
    assert_eq!(code, ExitCode::Syntax.as_i32());
    assert!(stderr.contains("--no-such-option"));
}

#[test]
fn unknown_display_format_exits_four() {
    let (code, _, stderr) = run_with_args(["integrity", "--display-format", "bsd", "f"]);
    assert_eq!(code, 4);
    assert!(stderr.contains("unknown display format"));
}

#[test]
fn unknown_environment_digest_exits_five() {
    let (code, _, stderr) = run_with_env(["integrity", "f"], Some("crc32"));
    assert_eq!(code, 5);
    assert_eq!(stderr, "Error : unknown digest type 'crc32'\n");
}

#[cfg(target_os = "linux")]
#[test]
fn info_reports_configuration() {
    let (code, stdout, stderr) = run_with_env(["integrity", "--info", "-v"], Some("sha256,md5"));
    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    let expected = format!(
        "integrity version: {}\n\
         integrity attribute prefix: user.integrity.\n\
         runtime environment: linux\n\
         digest list: md5,sha256\n\
         integrity verbose level: 2\n",
        env!("CARGO_PKG_VERSION")
    );
    assert_eq!(stdout, expected);
}

#[cfg(unix)]
#[test]
fn missing_path_exits_ten() {
    let dir = scratch_dir();
    let missing = dir.path().join("absent");
    let (code, stdout, stderr) = run_with_args([
        "integrity".into(),
        missing.clone().into_os_string(),
    ]);
    assert_eq!(code, ExitCode::MissingPath.as_i32());
    assert!(stdout.is_empty());
    assert_eq!(stderr, format!("{} : no such file or directory\n", missing.display()));
}

#[cfg(unix)]
#[test]
fn add_then_check_through_real_attributes() {
    let dir = scratch_dir();
    let file = write_file(dir.path(), "data.bin", "abc");
    if !xattrs_supported(&file) {
        return;
    }
    let path = file.to_string_lossy().into_owned();

    let (code, stdout, _) = run_with_args(["integrity", "-a", "--digest", "sha256", &path]);
    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{path} : sha256 : added\n"));

    let (code, stdout, _) = run_with_args(["integrity", "-v", "--digest", "sha256", &path]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        format!(
            "{path} : sha256 : ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad : PASSED\n"
        )
    );

    std::fs::write(&file, "abd").expect("alter content");
    let (code, stdout, _) = run_with_args(["integrity", "--digest", "sha256", &path]);
    assert_eq!(code, ExitCode::OutcomeFailed.as_i32());
    assert_eq!(stdout, format!("{path} : sha256 : FAILED\n"));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unwritable_stdout_exits_thirteen() {
    let mut stderr = Vec::new();
    let code = crate::run_with(["integrity", "--version"], None, &mut BrokenPipe, &mut stderr);
    assert_eq!(code, ExitCode::OutputFailure.as_i32());
}
