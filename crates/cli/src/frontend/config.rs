//! Resolves parsed arguments into a validated run configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use checksums::{DEFAULT_DIGEST, DigestRegistry};
use engine::{Action, DisplayFormat, Request, UnknownDisplayFormat};
use logging::{LogLevel, Verbosity};
use metadata::{Namespace, UnsupportedPlatform};
use thiserror::Error;

use super::arguments::ParsedArgs;
use crate::ExitCode;

/// Configuration problem detected before any path is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No paths were given.
    #[error("no arguments given")]
    NoArguments,
    /// `--display-format` is not recognised.
    #[error(transparent)]
    DisplayFormat(#[from] UnknownDisplayFormat),
    /// `sha1sum` output from a binary bound to another digest.
    #[error("asked for sha1sum output but not sha1 binary.")]
    Sha1sumConflict,
    /// `md5sum` output from a binary bound to another digest.
    #[error("asked for md5sum output but not md5 binary.")]
    Md5sumConflict,
    /// A requested digest is not registered.
    #[error("unknown digest type '{name}'")]
    UnknownDigest {
        /// Identifier as requested.
        name: String,
    },
    /// Attribute naming is unknown on this operating system.
    #[error(transparent)]
    Platform(#[from] UnsupportedPlatform),
}

impl ConfigError {
    /// Exit code the error terminates the run with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoArguments => ExitCode::NoArguments,
            Self::DisplayFormat(_) => ExitCode::UnknownDisplayFormat,
            Self::Sha1sumConflict => ExitCode::Sha1sumConflict,
            Self::Md5sumConflict => ExitCode::Md5sumConflict,
            Self::UnknownDigest { .. } => ExitCode::UnknownDigest,
            Self::Platform(_) => ExitCode::UnsupportedPlatform,
        }
    }
}

/// Everything a run needs, validated.
#[derive(Debug)]
pub struct Config {
    pub(crate) action: Action,
    pub(crate) digests: Vec<String>,
    pub(crate) display_format: Option<DisplayFormat>,
    pub(crate) verbosity: Verbosity,
    pub(crate) log_level: LogLevel,
    pub(crate) force: bool,
    pub(crate) recursive: bool,
    pub(crate) short_paths: bool,
    pub(crate) show_info: bool,
    pub(crate) namespace: Namespace,
    pub(crate) paths: Vec<PathBuf>,
}

impl Config {
    /// Validates `args`.
    ///
    /// `env_digest` is the value of `INTEGRITY_DIGEST`, consulted only when
    /// neither the program name, `--all` nor `--digest` chose the digests.
    /// Checks run in a fixed order so the first problem found decides the
    /// exit code.
    pub fn resolve(
        args: ParsedArgs,
        env_digest: Option<OsString>,
        registry: &DigestRegistry,
        namespace: Result<Namespace, UnsupportedPlatform>,
    ) -> Result<Self, ConfigError> {
        if args.paths.is_empty() && !args.show_info {
            return Err(ConfigError::NoArguments);
        }

        let log_level = args
            .log_level
            .as_deref()
            .map_or_else(LogLevel::default, LogLevel::from_name_or_default);

        let mut action = select_action(&args);
        let mut digests = select_digests(&args, env_digest, registry);

        let display_format = match args.display_format.as_deref() {
            None => None,
            Some(name) => {
                let format: DisplayFormat = name.parse()?;
                action = Action::List;
                if let Some(implied) = format.implied_digest() {
                    if args.binary_digest.as_deref().is_some_and(|bound| bound != implied) {
                        return Err(match format {
                            DisplayFormat::Md5sum => ConfigError::Md5sumConflict,
                            _ => ConfigError::Sha1sumConflict,
                        });
                    }
                    digests = vec![implied.to_owned()];
                }
                Some(format)
            }
        };

        if let Some(unknown) = digests.iter().find(|name| !registry.contains(name)) {
            return Err(ConfigError::UnknownDigest {
                name: unknown.clone(),
            });
        }
        digests.sort_unstable();
        digests.dedup();

        let namespace = namespace?;

        Ok(Self {
            action,
            digests,
            display_format,
            verbosity: Verbosity::from_flags(args.verbose, args.quiet),
            log_level,
            force: args.force,
            recursive: args.recursive,
            short_paths: args.short_paths,
            show_info: args.show_info,
            namespace,
            paths: args.paths.into_iter().map(PathBuf::from).collect(),
        })
    }

    /// Action to run.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Digests in processing order.
    #[must_use]
    pub fn digests(&self) -> &[String] {
        &self.digests
    }

    /// Selected display format.
    #[must_use]
    pub const fn display_format(&self) -> Option<DisplayFormat> {
        self.display_format
    }

    /// Report verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Diagnostic log level.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Engine request built from this configuration.
    #[must_use]
    pub fn request(&self) -> Request {
        Request::new(self.action, self.digests.iter().cloned())
            .with_force(self.force)
            .with_recursive(self.recursive)
    }
}

/// Picks the action; when several are given the first of check, delete,
/// add, list, transform wins.
fn select_action(args: &ParsedArgs) -> Action {
    [
        (args.check, Action::Check),
        (args.delete, Action::Delete),
        (args.add, Action::Add),
        (args.list, Action::List),
        (args.fix_old, Action::Transform),
    ]
    .into_iter()
    .find_map(|(given, action)| given.then_some(action))
    .unwrap_or_default()
}

/// Program name, then `--all`, then `--digest`, then the environment, then
/// the default digest.
fn select_digests(
    args: &ParsedArgs,
    env_digest: Option<OsString>,
    registry: &DigestRegistry,
) -> Vec<String> {
    if let Some(bound) = &args.binary_digest {
        return vec![bound.clone()];
    }
    if args.all_digests {
        return registry.identifiers().map(str::to_owned).collect();
    }

    let list = args
        .digest
        .clone()
        .filter(|list| !list.is_empty())
        .or_else(|| env_digest.map(|value| value.to_string_lossy().into_owned()))
        .filter(|list| !list.is_empty());
    match list {
        Some(list) => list.split(',').map(str::to_owned).collect(),
        None => vec![DEFAULT_DIGEST.to_owned()],
    }
}
