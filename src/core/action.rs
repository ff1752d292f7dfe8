use crate::error::AppError;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Status,
    Toggle,
    EnableNoEmpty,
    DisableEmpty,
}

static ALLOWED_ACTIONS: Lazy<String> = Lazy::new(|| {
    Action::ALL
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(",")
});

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Status,
        Action::Toggle,
        Action::EnableNoEmpty,
        Action::DisableEmpty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Status => "status",
            Action::Toggle => "toggle",
            Action::EnableNoEmpty => "enable-no-empty",
            Action::DisableEmpty => "disable-empty",
        }
    }

    /// Comma-separated list of every accepted action name.
    pub fn allowed() -> &'static str {
        ALLOWED_ACTIONS.as_str()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| AppError::InvalidAction {
                action: s.to_string(),
                allowed: Action::allowed().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_back() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn unknown_action_lists_the_four_allowed_names() {
        match "bogus".parse::<Action>() {
            Err(AppError::InvalidAction { action, allowed }) => {
                assert_eq!(action, "bogus");
                assert_eq!(allowed, "status,toggle,enable-no-empty,disable-empty");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Status".parse::<Action>().is_err());
    }
}
