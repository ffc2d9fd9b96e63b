//! crates/logging/src/verbosity.rs
//! Report verbosity selected by `--quiet` / `--verbose`.

use std::fmt;

/// How much of the per-file report is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Level 0: failures only.
    Quiet,
    /// Level 1: one concise line per outcome.
    #[default]
    Normal,
    /// Level 2: lines include checksums and error detail.
    Verbose,
}

impl Verbosity {
    /// Resolves the command-line flags. `quiet` wins when both are set.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Numeric level as shown by `--info`.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
