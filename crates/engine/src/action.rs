use std::fmt;
use std::str::FromStr;

use crate::UnknownAction;

/// Operation applied to every (file, digest) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Action {
    /// Recompute and compare against the stored value.
    #[default]
    Check,
    /// Compute, store and confirm a value.
    Add,
    /// Remove the stored value.
    Delete,
    /// Print the stored value without reading content.
    List,
    /// Migrate a legacy attribute to the canonical `sha1` key.
    Transform,
}

impl Action {
    /// Every action in the precedence order used when several are requested.
    pub const ALL: [Self; 5] = [
        Self::Check,
        Self::Delete,
        Self::Add,
        Self::List,
        Self::Transform,
    ];

    /// Lower-case action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Transform => "transform",
        }
    }

    /// Whether an I/O error while probing the stored value abandons the
    /// remaining digests of the current file.
    #[must_use]
    pub const fn probe_failure_is_fatal(self) -> bool {
        matches!(self, Self::Check | Self::List)
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| UnknownAction {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back_to_actions() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!(
            "verify".parse::<Action>(),
            Err(UnknownAction {
                name: "verify".to_owned()
            })
        );
        assert_eq!(
            UnknownAction {
                name: "verify".to_owned()
            }
            .to_string(),
            "unknown action \"verify\""
        );
    }

    #[test]
    fn only_read_actions_abort_on_probe_failure() {
        assert!(Action::Check.probe_failure_is_fatal());
        assert!(Action::List.probe_failure_is_fatal());
        assert!(!Action::Add.probe_failure_is_fatal());
        assert!(!Action::Delete.probe_failure_is_fatal());
        assert!(!Action::Transform.probe_failure_is_fatal());
    }
}
