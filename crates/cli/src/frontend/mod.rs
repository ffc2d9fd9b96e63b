//! Argument handling and execution of a single invocation.

use std::ffi::OsString;
use std::io::{self, Write};

use checksums::DigestRegistry;
use engine::{Channel, Engine, Reporter, Summary};
use metadata::{NAMESPACE, Namespace, XattrStore};
use tracing::{debug, error};

use crate::ExitCode;

pub(crate) mod arguments;
mod command_builder;
mod config;
mod help;

#[cfg(test)]
mod tests;

pub use arguments::{ParsedArgs, parse_args};
pub use config::{Config, ConfigError};
use help::{VERSION, help_text, usage_line};

/// Runs the tool with `arguments`, reading `INTEGRITY_DIGEST` from the
/// process environment.
///
/// Returns the process exit code. Report lines go to `stdout` or `stderr`
/// as the reporter directs; diagnostics go through `tracing`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with(arguments, arguments::env_digest(), stdout, stderr)
}

/// Like [`run`], with the `INTEGRITY_DIGEST` value supplied by the caller.
pub fn run_with<I, S, Out, Err>(
    arguments: I,
    env_digest: Option<OsString>,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{error}");
            return ExitCode::Syntax.as_i32();
        }
    };
    execute(parsed, env_digest, stdout, stderr).as_i32()
}

fn execute<Out: Write, Err: Write>(
    parsed: ParsedArgs,
    env_digest: Option<OsString>,
    stdout: &mut Out,
    stderr: &mut Err,
) -> ExitCode {
    let registry = DigestRegistry::builtin();

    if parsed.show_help {
        return finish_output(write!(stdout, "{}", help_text(&parsed.program_name, &registry)));
    }
    if parsed.show_version {
        return finish_output(writeln!(stdout, "{VERSION}"));
    }

    let program_name = parsed.program_name.clone();
    let config = match Config::resolve(parsed, env_digest, &registry, Namespace::current()) {
        Ok(config) => config,
        Err(error) => {
            let _ = report_config_error(&error, &program_name, stderr);
            return error.exit_code();
        }
    };

    logging::init_tracing(config.log_level());
    debug!(?config, "configuration resolved");

    if config.show_info {
        return finish_output(write_info(&config, stdout));
    }

    let request = config.request();
    let reporter = Reporter::new(config.verbosity())
        .with_display_format(config.display_format())
        .with_short_paths(config.short_paths);
    let engine = Engine::new(registry, config.namespace, XattrStore::new());

    let mut write_error = None;
    let summary = engine.process(&config.paths, &request, |record| {
        if write_error.is_some() {
            return;
        }
        let Some(line) = reporter.render_record(&record) else {
            return;
        };
        let written = match line.channel {
            Channel::Stdout => writeln!(stdout, "{}", line.text),
            Channel::Stderr => writeln!(stderr, "{}", line.text),
        };
        if let Err(error) = written {
            write_error = Some(error);
        }
    });

    if let Some(error) = write_error.or_else(|| stdout.flush().err()) {
        error!(%error, "failed to write report");
        return ExitCode::OutputFailure;
    }
    summary_exit_code(&summary)
}

/// Maps the run summary onto an exit code. Path-level problems outrank
/// failed outcomes.
pub(crate) fn summary_exit_code(summary: &Summary) -> ExitCode {
    if summary.walk_aborted {
        ExitCode::WalkAborted
    } else if summary.unreadable > 0 {
        ExitCode::UnreadablePath
    } else if summary.missing > 0 {
        ExitCode::MissingPath
    } else if summary.failed > 0 {
        ExitCode::OutcomeFailed
    } else {
        ExitCode::Ok
    }
}

fn finish_output(result: io::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::Ok,
        Err(error) => {
            error!(%error, "failed to write output");
            ExitCode::OutputFailure
        }
    }
}

fn report_config_error<Err: Write>(
    error: &ConfigError,
    program_name: &str,
    stderr: &mut Err,
) -> io::Result<()> {
    writeln!(stderr, "Error : {error}")?;
    match error {
        ConfigError::NoArguments => {
            writeln!(stderr, "{}", usage_line(program_name))?;
            writeln!(stderr, "Try '{program_name} --help' for more information.")
        }
        ConfigError::DisplayFormat(_) => {
            writeln!(stderr, " Should be one of: sha1sum, md5sum, cksum")
        }
        ConfigError::Platform(_) => {
            writeln!(stderr, "Supported OS types 'darwin, freebsd, linux'")
        }
        _ => Ok(()),
    }
}

fn write_info<Out: Write>(config: &Config, stdout: &mut Out) -> io::Result<()> {
    writeln!(stdout, "integrity version: {VERSION}")?;
    writeln!(
        stdout,
        "integrity attribute prefix: {}{NAMESPACE}.",
        config.namespace.prefix()
    )?;
    writeln!(
        stdout,
        "runtime environment: {}",
        config.namespace.platform().as_str()
    )?;
    writeln!(stdout, "digest list: {}", config.digests().join(","))?;
    writeln!(
        stdout,
        "integrity verbose level: {}",
        config.verbosity().level()
    )
}
