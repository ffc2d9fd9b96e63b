use std::ffi::OsString;

/// Raw command-line state before configuration is resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Program name as invoked.
    pub program_name: String,
    /// Digest implied by a `integrity.<digest>` program name.
    pub binary_digest: Option<String>,
    /// `--help`
    pub show_help: bool,
    /// `--version`
    pub show_version: bool,
    /// `--info`
    pub show_info: bool,
    /// `--check`
    pub check: bool,
    /// `--add`
    pub add: bool,
    /// `--delete`
    pub delete: bool,
    /// `--list`
    pub list: bool,
    /// `--fix-old`
    pub fix_old: bool,
    /// `--all`
    pub all_digests: bool,
    /// `--force`
    pub force: bool,
    /// `--verbose`
    pub verbose: bool,
    /// `--quiet`
    pub quiet: bool,
    /// `--short-paths`
    pub short_paths: bool,
    /// `--recursive`
    pub recursive: bool,
    /// `--loglevel`
    pub log_level: Option<String>,
    /// `--digest`
    pub digest: Option<String>,
    /// `--display-format`
    pub display_format: Option<String>,
    /// Paths to process, in order.
    pub paths: Vec<OsString>,
}
