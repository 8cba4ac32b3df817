use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::artifacts::core::error::{VcsError, VcsResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> VcsResult<Self> {
        let name = name.into();
        let invalid = |reason| VcsError::InvalidName {
            what: "branch name",
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("branch name cannot be empty"));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|_| invalid("branch name pattern failed to compile"))?;

        if re.is_match(&name) {
            Err(invalid("must be a single path component without whitespace or special characters"))
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
