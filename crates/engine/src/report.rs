//! Outcome reporter.
//!
//! Maps each [`Record`] to at most one line of user-facing output. The
//! mapping depends only on the record, the [`Verbosity`], the optional
//! [`DisplayFormat`] and whether short paths were requested.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use logging::Verbosity;

use crate::{Action, Notice, Outcome, Reason, Record, Status, UnknownDisplayFormat};

/// Output layout mimicking a familiar checksum tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    /// `<hex> *<path>`, SHA family only.
    Sha1sum,
    /// `<hex>  <path>`, MD5 family only.
    Md5sum,
    /// The default `path : digest : hex` layout.
    Cksum,
}

impl DisplayFormat {
    /// Every supported format.
    pub const ALL: [Self; 3] = [Self::Sha1sum, Self::Md5sum, Self::Cksum];

    /// Name accepted by `--display-format`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1sum => "sha1sum",
            Self::Md5sum => "md5sum",
            Self::Cksum => "cksum",
        }
    }

    /// Identifier prefix of the digests this format prints.
    #[must_use]
    pub const fn family(self) -> Option<&'static str> {
        match self {
            Self::Sha1sum => Some("sha"),
            Self::Md5sum => Some("md5"),
            Self::Cksum => None,
        }
    }

    /// Digest implied when the format is chosen.
    #[must_use]
    pub const fn implied_digest(self) -> Option<&'static str> {
        match self {
            Self::Sha1sum => Some("sha1"),
            Self::Md5sum => Some("md5"),
            Self::Cksum => None,
        }
    }

    /// Whether lines for `digest` are printed in this format.
    #[must_use]
    pub fn allows(self, digest: &str) -> bool {
        self.family().is_none_or(|prefix| digest.starts_with(prefix))
    }
}

impl FromStr for DisplayFormat {
    type Err = UnknownDisplayFormat;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == name)
            .ok_or_else(|| UnknownDisplayFormat {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream a [`Line`] belongs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// One rendered report line, without the trailing newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Destination stream.
    pub channel: Channel,
    /// Line text.
    pub text: String,
}

impl Line {
    fn stdout(text: String) -> Self {
        Self {
            channel: Channel::Stdout,
            text,
        }
    }

    fn stderr(text: String) -> Self {
        Self {
            channel: Channel::Stderr,
            text,
        }
    }
}

/// Renders records according to the user's output preferences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reporter {
    verbosity: Verbosity,
    format: Option<DisplayFormat>,
    short_paths: bool,
}

impl Reporter {
    /// Creates a reporter at `verbosity` with the default layout.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            format: None,
            short_paths: false,
        }
    }

    /// Selects a display format.
    #[must_use]
    pub const fn with_display_format(mut self, format: Option<DisplayFormat>) -> Self {
        self.format = format;
        self
    }

    /// Prints file names instead of full paths in outcome lines.
    #[must_use]
    pub const fn with_short_paths(mut self, short_paths: bool) -> Self {
        self.short_paths = short_paths;
        self
    }

    /// Renders either kind of record.
    #[must_use]
    pub fn render_record(&self, record: &Record) -> Option<Line> {
        match record {
            Record::Outcome(outcome) => self.render(outcome),
            Record::Notice(notice) => self.render_notice(notice),
        }
    }

    /// Renders one outcome. Failures print at every verbosity.
    #[must_use]
    pub fn render(&self, outcome: &Outcome) -> Option<Line> {
        if let Some(format) = self.format {
            if !format.allows(outcome.digest()) {
                return None;
            }
        }

        let path = self.display_path(outcome.path());
        let view = View {
            path: &path,
            digest: outcome.digest(),
            outcome,
            verbosity: self.verbosity,
        };
        match outcome.action() {
            Action::Check => view.check(),
            Action::Add => view.add(),
            Action::Delete => view.delete(),
            Action::List => view.list(self.format),
            Action::Transform => view.transform(),
        }
    }

    /// Renders a path-level notice.
    #[must_use]
    pub fn render_notice(&self, notice: &Notice) -> Option<Line> {
        let path = notice.path().display();
        match notice {
            Notice::MissingPath { .. } => {
                Some(Line::stderr(format!("{path} : no such file or directory")))
            }
            Notice::Unreadable { error, .. } => Some(Line::stderr(format!("{path} : ERROR : {error}"))),
            Notice::DirectorySkipped { .. } => (self.verbosity == Verbosity::Verbose)
                .then(|| Line::stdout(format!("{path} : skipping directory"))),
            Notice::SubtreeSkipped { error, .. } => Some(Line::stderr(format!(
                "{path} : skipping unreadable directory : {}",
                error.io_error()
            ))),
            Notice::WalkAborted { error, .. } => Some(Line::stderr(format!(
                "Error walking the path {path}: {}",
                error.io_error()
            ))),
        }
    }

    fn display_path<'a>(&self, path: &'a Path) -> Cow<'a, str> {
        if self.short_paths {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy();
            }
        }
        path.to_string_lossy()
    }
}

/// Borrowed pieces of an outcome being rendered.
struct View<'a> {
    path: &'a str,
    digest: &'a str,
    outcome: &'a Outcome,
    verbosity: Verbosity,
}

impl View<'_> {
    fn checksum(&self) -> &str {
        self.outcome.checksum().unwrap_or_default()
    }

    fn error_text(&self) -> String {
        self.outcome.error().map_or_else(
            || self.outcome.reason().describe().to_owned(),
            ToString::to_string,
        )
    }

    fn detail(&self) -> String {
        let stored = self.outcome.stored().unwrap_or_default();
        let computed = self.outcome.computed().unwrap_or_default();
        match self.outcome.reason() {
            Reason::Mismatch => format!(
                "calculated checksum and stored checksum differ; stored [{stored}] calc'd [{computed}]"
            ),
            Reason::ConfirmMismatch => format!(
                "calculated checksum and filesystem read checksum differ; stored [{stored}] calc'd [{computed}]"
            ),
            Reason::ProbeFailed => {
                format!("Error testing for existing checksum; {}", self.error_text())
            }
            _ => self.error_text(),
        }
    }

    /// `text` at normal verbosity, `verbose` at verbose, nothing when quiet.
    fn informational(&self, text: impl FnOnce() -> String, verbose: impl FnOnce() -> String) -> Option<Line> {
        match self.verbosity {
            Verbosity::Quiet => None,
            Verbosity::Normal => Some(Line::stdout(text())),
            Verbosity::Verbose => Some(Line::stdout(verbose())),
        }
    }

    fn failed(&self) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        Some(Line::stdout(match self.verbosity {
            Verbosity::Quiet => format!("{path} : FAILED"),
            Verbosity::Normal => format!("{path} : {digest} : FAILED"),
            Verbosity::Verbose => format!("{path} : {digest} : FAILED : {}", self.detail()),
        }))
    }

    fn check(&self) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        match self.outcome.reason() {
            Reason::Match => self.informational(
                || format!("{path} : {digest} : PASSED"),
                || format!("{path} : {digest} : {} : PASSED", self.checksum()),
            ),
            Reason::NoValue => self.informational(
                || format!("{path} : {digest} : No checksum"),
                || format!("{path} : {digest} : No checksum, skipped"),
            ),
            Reason::ProbeFailed => Some(Line::stderr(format!(
                "{path} : failed checking if checksum was stored : {}",
                self.error_text()
            ))),
            _ => self.failed(),
        }
    }

    fn add(&self) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        match self.outcome.reason() {
            Reason::Added => self.informational(
                || format!("{path} : {digest} : added"),
                || format!("{path} : {digest} : {} : added", self.checksum()),
            ),
            Reason::AlreadyExists => self.informational(
                || format!("{path} : {digest} : skipped"),
                || format!("{path} : {digest} : We already have a checksum stored, skipped"),
            ),
            _ => self.failed(),
        }
    }

    fn delete(&self) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        match self.outcome.reason() {
            Reason::Removed => self.informational(
                || format!("{path} : {digest} : removed"),
                || format!("{path} : {digest} : removed"),
            ),
            Reason::NotFound => self.informational(
                || format!("{path} : {digest} : no attribute"),
                || format!("{path} : {digest} : no attribute"),
            ),
            _ => self.failed(),
        }
    }

    fn list(&self, format: Option<DisplayFormat>) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        match self.outcome.reason() {
            Reason::Listed => {
                let checksum = self.checksum();
                Some(Line::stdout(match format {
                    Some(DisplayFormat::Sha1sum) => format!("{checksum} *{path}"),
                    Some(DisplayFormat::Md5sum) => format!("{checksum}  {path}"),
                    Some(DisplayFormat::Cksum) | None => format!("{path} : {digest} : {checksum}"),
                }))
            }
            Reason::NoValue => self.informational(
                || format!("{path} : {digest} : [none]"),
                || {
                    format!(
                        "{path} : {digest} : [no checksum stored in {}]",
                        self.outcome.key()
                    )
                },
            ),
            _ => Some(Line::stdout(format!("{path} : Error : {}", self.error_text()))),
        }
    }

    fn transform(&self) -> Option<Line> {
        let (path, digest) = (self.path, self.digest);
        match self.outcome.reason() {
            Reason::Migrated => self.informational(
                || format!("{path} : {digest} : RENAMED"),
                || {
                    let legacy = self
                        .outcome
                        .legacy_key()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    format!(
                        "{path} : {digest} : Renamed old integrity attribute {legacy} to {}",
                        self.outcome.key()
                    )
                },
            ),
            Reason::NoLegacyAttribute => self.informational(
                || format!("{path} : {digest} : SKIPPED"),
                || format!("{path} : {digest} : SKIPPED : No old attributes found"),
            ),
            _ => {
                debug_assert_eq!(self.outcome.status(), Status::Failed);
                Some(Line::stdout(match self.verbosity {
                    Verbosity::Quiet => format!("{path} : ERROR"),
                    Verbosity::Normal => format!("{path} : {digest} : ERROR : Error renaming checksum"),
                    Verbosity::Verbose => format!(
                        "{path} : {digest} : ERROR : Error renaming checksum : {}",
                        self.error_text()
                    ),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileUnit;
    use metadata::{AttributeError, Namespace, Platform};
    use std::io;

    const SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    fn unit(digest: &str) -> FileUnit {
        FileUnit::new(
            "/data/photos/a.jpg",
            3,
            digest,
            Namespace::new(Platform::Linux).key(digest),
        )
    }

    fn computed(digest: &str, checksum: &str) -> FileUnit {
        let mut unit = unit(digest);
        unit.set_checksum(checksum.to_owned());
        unit
    }

    fn denied(unit: &FileUnit) -> AttributeError {
        AttributeError::new(
            "read",
            unit.path(),
            unit.key().as_str(),
            io::Error::from(io::ErrorKind::PermissionDenied),
        )
    }

    fn text(reporter: Reporter, outcome: &Outcome) -> Option<String> {
        reporter.render(outcome).map(|line| line.text)
    }

    #[test]
    fn check_pass_depends_on_verbosity() {
        let outcome = Outcome::new(Action::Check, &computed("sha1", SHA1), Reason::Match);
        assert_eq!(text(Reporter::new(Verbosity::Quiet), &outcome), None);
        assert_eq!(
            text(Reporter::new(Verbosity::Normal), &outcome).as_deref(),
            Some("/data/photos/a.jpg : sha1 : PASSED")
        );
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &outcome),
            Some(format!("/data/photos/a.jpg : sha1 : {SHA1} : PASSED"))
        );
    }

    #[test]
    fn check_failure_prints_even_when_quiet() {
        let outcome = Outcome::new(Action::Check, &computed("sha1", "bbbb"), Reason::Mismatch)
            .with_stored("aaaa");
        let quiet = Reporter::new(Verbosity::Quiet).render(&outcome).expect("line");
        assert_eq!(quiet.channel, Channel::Stdout);
        assert_eq!(quiet.text, "/data/photos/a.jpg : FAILED");
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &outcome).as_deref(),
            Some(
                "/data/photos/a.jpg : sha1 : FAILED : calculated checksum and stored checksum \
                 differ; stored [aaaa] calc'd [bbbb]"
            )
        );
    }

    #[test]
    fn check_probe_failure_goes_to_stderr() {
        let unit = unit("sha1");
        let outcome = Outcome::new(Action::Check, &unit, Reason::ProbeFailed).with_error(denied(&unit));
        let line = Reporter::new(Verbosity::Quiet).render(&outcome).expect("line");
        assert_eq!(line.channel, Channel::Stderr);
        assert!(
            line.text
                .starts_with("/data/photos/a.jpg : failed checking if checksum was stored : ")
        );
    }

    #[test]
    fn add_lines() {
        let added = Outcome::new(Action::Add, &computed("sha256", "cafe"), Reason::Added);
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &added).as_deref(),
            Some("/data/photos/a.jpg : sha256 : cafe : added")
        );

        let exists = Outcome::new(Action::Add, &unit("sha256"), Reason::AlreadyExists).with_stored("cafe");
        assert_eq!(
            text(Reporter::new(Verbosity::Normal), &exists).as_deref(),
            Some("/data/photos/a.jpg : sha256 : skipped")
        );
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &exists).as_deref(),
            Some("/data/photos/a.jpg : sha256 : We already have a checksum stored, skipped")
        );

        let confirm = Outcome::new(Action::Add, &computed("sha256", "cafe"), Reason::ConfirmMismatch)
            .with_stored("caf");
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &confirm).as_deref(),
            Some(
                "/data/photos/a.jpg : sha256 : FAILED : calculated checksum and filesystem read \
                 checksum differ; stored [caf] calc'd [cafe]"
            )
        );
    }

    #[test]
    fn delete_lines() {
        let removed = Outcome::new(Action::Delete, &unit("md5"), Reason::Removed);
        let missing = Outcome::new(Action::Delete, &unit("md5"), Reason::NotFound);
        let reporter = Reporter::new(Verbosity::Normal);
        assert_eq!(
            text(reporter, &removed).as_deref(),
            Some("/data/photos/a.jpg : md5 : removed")
        );
        assert_eq!(
            text(reporter, &missing).as_deref(),
            Some("/data/photos/a.jpg : md5 : no attribute")
        );
    }

    #[test]
    fn list_uses_display_format() {
        let outcome = Outcome::new(Action::List, &unit("sha1"), Reason::Listed).with_stored(SHA1);
        let quiet = Reporter::new(Verbosity::Quiet);
        assert_eq!(
            text(quiet, &outcome),
            Some(format!("/data/photos/a.jpg : sha1 : {SHA1}"))
        );
        assert_eq!(
            text(quiet.with_display_format(Some(DisplayFormat::Sha1sum)), &outcome),
            Some(format!("{SHA1} */data/photos/a.jpg"))
        );
        assert_eq!(
            text(quiet.with_display_format(Some(DisplayFormat::Md5sum)), &outcome),
            None
        );

        let md5 = Outcome::new(Action::List, &unit("md5"), Reason::Listed).with_stored("900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            text(quiet.with_display_format(Some(DisplayFormat::Md5sum)), &md5).as_deref(),
            Some("900150983cd24fb0d6963f7d28e17f72  /data/photos/a.jpg")
        );
    }

    #[test]
    fn list_without_value_names_the_key_when_verbose() {
        let outcome = Outcome::new(Action::List, &unit("sha1"), Reason::NoValue);
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &outcome).as_deref(),
            Some("/data/photos/a.jpg : sha1 : [no checksum stored in user.integrity.sha1]")
        );
        assert_eq!(text(Reporter::new(Verbosity::Quiet), &outcome), None);
    }

    #[test]
    fn transform_lines() {
        let namespace = Namespace::new(Platform::Linux);
        let legacy = namespace.legacy_keys().next().expect("legacy key");
        let migrated = Outcome::new(Action::Transform, &unit("sha1"), Reason::Migrated)
            .with_stored(SHA1)
            .with_legacy_key(legacy.clone());
        assert_eq!(
            text(Reporter::new(Verbosity::Verbose), &migrated),
            Some(format!(
                "/data/photos/a.jpg : sha1 : Renamed old integrity attribute {legacy} to user.integrity.sha1"
            ))
        );

        let none = Outcome::new(Action::Transform, &unit("sha1"), Reason::NoLegacyAttribute);
        assert_eq!(
            text(Reporter::new(Verbosity::Normal), &none).as_deref(),
            Some("/data/photos/a.jpg : sha1 : SKIPPED")
        );

        let unit = unit("sha1");
        let failed = Outcome::new(Action::Transform, &unit, Reason::ReadError).with_error(denied(&unit));
        assert_eq!(
            text(Reporter::new(Verbosity::Quiet), &failed).as_deref(),
            Some("/data/photos/a.jpg : ERROR")
        );
    }

    #[test]
    fn short_paths_print_file_names() {
        let outcome = Outcome::new(Action::Delete, &unit("md5"), Reason::Removed);
        assert_eq!(
            text(Reporter::new(Verbosity::Normal).with_short_paths(true), &outcome).as_deref(),
            Some("a.jpg : md5 : removed")
        );
    }

    #[test]
    fn display_format_filters_every_action() {
        let reporter = Reporter::new(Verbosity::Normal).with_display_format(Some(DisplayFormat::Sha1sum));
        let outcome = Outcome::new(Action::Check, &computed("md5", "x"), Reason::Mismatch);
        assert_eq!(reporter.render(&outcome), None);
        let sha = Outcome::new(Action::Check, &computed("sha256", "x"), Reason::Match);
        assert!(reporter.render(&sha).is_some());
    }

    #[test]
    fn notices() {
        let reporter = Reporter::new(Verbosity::Normal);
        let missing = reporter
            .render_notice(&Notice::MissingPath {
                path: "nope".into(),
            })
            .expect("line");
        assert_eq!(missing.channel, Channel::Stderr);
        assert_eq!(missing.text, "nope : no such file or directory");

        let skipped = Notice::DirectorySkipped {
            path: "dir".into(),
        };
        assert_eq!(reporter.render_notice(&skipped), None);
        assert_eq!(
            Reporter::new(Verbosity::Verbose)
                .render_notice(&skipped)
                .map(|line| line.text)
                .as_deref(),
            Some("dir : skipping directory")
        );
    }

    #[test]
    fn display_format_names_round_trip_and_reject_unknown() {
        for format in DisplayFormat::ALL {
            assert_eq!(format.as_str().parse::<DisplayFormat>(), Ok(format));
        }
        let error = "bsdsum".parse::<DisplayFormat>().expect_err("unknown");
        assert_eq!(error.to_string(), "unknown display format \"bsdsum\"");
        assert_eq!(DisplayFormat::Md5sum.implied_digest(), Some("md5"));
        assert!(DisplayFormat::Cksum.allows("blake2b_512"));
    }
}
