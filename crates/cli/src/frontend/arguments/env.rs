use std::env;
use std::ffi::OsString;

/// Environment variable consulted when `--digest` is absent.
pub(crate) const DIGEST_ENV: &str = "INTEGRITY_DIGEST";

pub(crate) fn env_digest() -> Option<OsString> {
    env::var_os(DIGEST_ENV)
}
