use std::ffi::OsString;

use checksums::DigestRegistry;
use metadata::{Namespace, Platform, UnsupportedPlatform};

use crate::frontend::{Config, ConfigError, parse_args};

/// Runs the CLI with no `INTEGRITY_DIGEST` and captures both streams.
pub(super) fn run_with_args<I, S>(args: I) -> (i32, String, String)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    run_with_env(args, None)
}

pub(super) fn run_with_env<I, S>(args: I, env_digest: Option<&str>) -> (i32, String, String)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = crate::run_with(args, env_digest.map(OsString::from), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

/// Resolves a configuration on Linux naming rules.
pub(super) fn resolve<const N: usize>(args: [&str; N], env_digest: Option<&str>) -> Result<Config, ConfigError> {
    resolve_on(args, env_digest, Ok(Namespace::new(Platform::Linux)))
}

pub(super) fn resolve_on<const N: usize>(
    args: [&str; N],
    env_digest: Option<&str>,
    namespace: Result<Namespace, UnsupportedPlatform>,
) -> Result<Config, ConfigError> {
    let parsed = parse_args(args).expect("arguments parse");
    Config::resolve(
        parsed,
        env_digest.map(OsString::from),
        &DigestRegistry::builtin(),
        namespace,
    )
}
