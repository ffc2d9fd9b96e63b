use clap::builder::OsStringValueParser;
use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};

fn flag(id: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let arg = Arg::new(id).long(id).help(help).action(ArgAction::SetTrue);
    match short {
        Some(short) => arg.short(short),
        None => arg,
    }
}

fn value(id: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name(value_name)
        .help(help)
        .value_parser(value_parser!(String))
        .action(ArgAction::Set)
}

/// Builds the `clap` command used for parsing.
///
/// Help and version are plain flags so their output stays under our
/// control instead of clap's renderer.
pub(crate) fn clap_command(program_name: &str) -> ClapCommand {
    ClapCommand::new("integrity")
        .bin_name(program_name.to_owned())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(flag("help", Some('h'), "Show this help message and exit."))
        .arg(flag("version", None, "Output version information and exit."))
        .arg(flag("info", None, "Show build and configuration information and exit."))
        .arg(flag(
            "check",
            Some('c'),
            "Check stored checksums against file content [default].",
        ))
        .arg(flag(
            "add",
            Some('a'),
            "Calculate checksums and store them in extended attributes.",
        ))
        .arg(flag("delete", Some('d'), "Delete stored checksums."))
        .arg(flag("list", Some('l'), "List stored checksums."))
        .arg(flag(
            "fix-old",
            None,
            "Rename attributes written by older releases to the current name.",
        ))
        .arg(flag("all", Some('x'), "Use every known digest."))
        .arg(flag(
            "force",
            Some('f'),
            "Recalculate and store checksums even when one is already stored.",
        ))
        .arg(flag("verbose", Some('v'), "Output more information."))
        .arg(flag("quiet", Some('q'), "Output only failures."))
        .arg(flag(
            "short-paths",
            Some('s'),
            "Show file names instead of full paths.",
        ))
        .arg(flag("recursive", Some('r'), "Recurse into directories."))
        .arg(value(
            "loglevel",
            "LEVEL",
            "Diagnostic log level: panic, fatal, error, warn, info, debug, trace.",
        ))
        .arg(value(
            "digest",
            "LIST",
            "Comma separated digests to use (default sha1).",
        ))
        .arg(value(
            "display-format",
            "FMT",
            "List in a checksum tool layout: sha1sum, md5sum, cksum.",
        ))
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append)
                .num_args(0..),
        )
}
