use std::ffi::OsString;

use super::{ParsedArgs, ProgramName};
use crate::frontend::command_builder::clap_command;

/// Parses `arguments`, whose first item is the program name.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    let program = ProgramName::detect(args.first().map(OsString::as_os_str));
    let matches = clap_command(program.as_str()).try_get_matches_from(&args)?;

    let string = |id: &str| matches.get_one::<String>(id).cloned();
    Ok(ParsedArgs {
        program_name: program.as_str().to_owned(),
        binary_digest: program.digest().map(str::to_owned),
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        show_info: matches.get_flag("info"),
        check: matches.get_flag("check"),
        add: matches.get_flag("add"),
        delete: matches.get_flag("delete"),
        list: matches.get_flag("list"),
        fix_old: matches.get_flag("fix-old"),
        all_digests: matches.get_flag("all"),
        force: matches.get_flag("force"),
        verbose: matches.get_flag("verbose"),
        quiet: matches.get_flag("quiet"),
        short_paths: matches.get_flag("short-paths"),
        recursive: matches.get_flag("recursive"),
        log_level: string("loglevel"),
        digest: string("digest"),
        display_format: string("display-format"),
        paths: matches
            .get_many::<OsString>("paths")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    })
}
