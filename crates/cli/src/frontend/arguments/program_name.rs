use std::ffi::OsStr;
use std::path::Path;

/// Invoked program name and the digest it is bound to, if any.
///
/// A binary installed as `integrity.sha256` always uses `sha256`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ProgramName {
    name: String,
    digest: Option<String>,
}

impl ProgramName {
    pub(crate) fn detect(argv0: Option<&OsStr>) -> Self {
        let name = argv0
            .and_then(|arg| Path::new(arg).file_name())
            .map_or_else(|| "integrity".to_owned(), |name| name.to_string_lossy().into_owned());

        let mut parts = name.split('.');
        let digest = match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(digest), None) => Some(digest.to_owned()),
            _ => None,
        };
        Self { name, digest }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.name
    }

    pub(crate) fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }
}
