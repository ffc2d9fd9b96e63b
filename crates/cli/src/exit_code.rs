//! Process exit codes.
//!
//! Every way the tool can finish maps onto one [`ExitCode`]. Configuration
//! errors are detected before any file is touched; the processing codes
//! summarise what happened across all paths.

use std::fmt;

/// Exit status returned by [`run`](crate::run).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Everything requested completed.
    Ok = 0,

    /// Command-line arguments could not be parsed.
    Syntax = 1,

    /// No paths were given.
    NoArguments = 2,

    /// The operating system has no known attribute naming convention.
    UnsupportedPlatform = 3,

    /// `--display-format` named an unknown format.
    UnknownDisplayFormat = 4,

    /// A requested digest is not known to this build.
    UnknownDigest = 5,

    /// `sha1sum` output was requested from a binary bound to another digest.
    Sha1sumConflict = 6,

    /// `md5sum` output was requested from a binary bound to another digest.
    Md5sumConflict = 7,

    /// At least one file outcome failed.
    ///
    /// `transform` finding nothing to migrate does not count.
    OutcomeFailed = 9,

    /// At least one path does not exist.
    MissingPath = 10,

    /// A directory walk failed and the remaining paths were abandoned.
    WalkAborted = 11,

    /// At least one path could not be examined.
    UnreadablePath = 12,

    /// Report output could not be written.
    OutputFailure = 13,
}

impl ExitCode {
    /// Every defined code in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ok,
        Self::Syntax,
        Self::NoArguments,
        Self::UnsupportedPlatform,
        Self::UnknownDisplayFormat,
        Self::UnknownDigest,
        Self::Sha1sumConflict,
        Self::Md5sumConflict,
        Self::OutcomeFailed,
        Self::MissingPath,
        Self::WalkAborted,
        Self::UnreadablePath,
        Self::OutputFailure,
    ];

    /// Returns the numeric exit code value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cli::ExitCode;
    ///
    /// assert_eq!(ExitCode::Ok.as_i32(), 0);
    /// assert_eq!(ExitCode::MissingPath.as_i32(), 10);
    /// ```
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Converts a numeric code back into an [`ExitCode`].
    #[must_use]
    pub fn from_i32(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_i32() == code)
    }

    /// Returns a short description of the code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Syntax => "syntax or usage error",
            Self::NoArguments => "no arguments given",
            Self::UnsupportedPlatform => "unsupported platform",
            Self::UnknownDisplayFormat => "unknown display format",
            Self::UnknownDigest => "unknown digest",
            Self::Sha1sumConflict => "sha1sum output requested from a non-sha1 binary",
            Self::Md5sumConflict => "md5sum output requested from a non-md5 binary",
            Self::OutcomeFailed => "one or more files failed",
            Self::MissingPath => "no such file or directory",
            Self::WalkAborted => "error walking a directory",
            Self::UnreadablePath => "error examining a path",
            Self::OutputFailure => "error writing output",
        }
    }

    /// Returns `true` for [`ExitCode::Ok`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(u8::try_from(code.as_i32()).unwrap_or(u8::MAX))
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
