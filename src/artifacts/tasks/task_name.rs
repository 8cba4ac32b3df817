use crate::artifacts::core::error::{VcsError, VcsResult};
use crate::artifacts::tasks::INVALID_TASK_NAME_REGEX;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskName(String);

impl TaskName {
    pub fn try_parse(name: impl Into<String>) -> VcsResult<Self> {
        let name = name.into();
        let invalid = |reason| VcsError::InvalidName {
            what: "task name",
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("task name cannot be empty"));
        }

        let re = regex::Regex::new(INVALID_TASK_NAME_REGEX)
            .map_err(|_| invalid("task name pattern failed to compile"))?;

        if re.is_match(&name) {
            Err(invalid("must be a single path component without whitespace"))
        } else {
            Ok(Self(name))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
