use std::ffi::OsStr;

use super::*;

#[test]
fn flags_and_paths_are_captured() {
    let parsed = parse_args(["integrity", "-a", "-r", "-v", "one", "two"]).expect("parse");
    assert!(parsed.add && parsed.recursive && parsed.verbose);
    assert!(!parsed.check && !parsed.quiet);
    assert_eq!(parsed.paths, ["one", "two"]);
}

#[test]
fn combined_short_flags_are_accepted() {
    let parsed = parse_args(["integrity", "-dxq", "file"]).expect("parse");
    assert!(parsed.delete && parsed.all_digests && parsed.quiet);
}

#[test]
fn value_options_are_captured() {
    let parsed = parse_args([
        "integrity",
        "--digest",
        "sha256,md5",
        "--loglevel=debug",
        "--display-format",
        "md5sum",
        "file",
    ])
    .expect("parse");
    assert_eq!(parsed.digest.as_deref(), Some("sha256,md5"));
    assert_eq!(parsed.log_level.as_deref(), Some("debug"));
    assert_eq!(parsed.display_format.as_deref(), Some("md5sum"));
}

#[test]
fn unknown_option_is_rejected() {
    let error = parse_args(["integrity", "--bogus", "file"]).expect_err("unknown option");
    assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn help_and_version_are_plain_flags() {
    let parsed = parse_args(["integrity", "-h"]).expect("parse");
    assert!(parsed.show_help);
    let parsed = parse_args(["integrity", "--version"]).expect("parse");
    assert!(parsed.show_version);
}

#[test]
fn program_name_binds_digest() {
    let program = ProgramName::detect(Some(OsStr::new("/usr/local/bin/integrity.sha256")));
    assert_eq!(program.as_str(), "integrity.sha256");
    assert_eq!(program.digest(), Some("sha256"));

    let parsed = parse_args(["integrity.md5", "file"]).expect("parse");
    assert_eq!(parsed.binary_digest.as_deref(), Some("md5"));
}

#[test]
fn program_name_without_single_dot_binds_nothing() {
    for name in ["integrity", "integrity.sha1.old", "/opt/integrity"] {
        assert_eq!(ProgramName::detect(Some(OsStr::new(name))).digest(), None, "{name}");
    }
    assert_eq!(ProgramName::detect(None).as_str(), "integrity");
}
