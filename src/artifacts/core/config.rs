//! Environment-driven configuration
//!
//! Mirrors how the author identity is picked up from `*_AUTHOR_*` variables:
//!
//! - `VCS_AUTHOR_NAME`: default commit author for the CLI
//! - `VCS_AUTHOR_DATE`: fixed commit timestamp (`%Y-%m-%d %H:%M:%S`)

use chrono::NaiveDateTime;
use tracing::warn;

pub const AUTHOR_NAME_ENV: &str = "VCS_AUTHOR_NAME";
pub const AUTHOR_DATE_ENV: &str = "VCS_AUTHOR_DATE";
pub const LOG_FILTER_ENV: &str = "VCS_LOG";

const AUTHOR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    author_name: Option<String>,
    author_date: Option<NaiveDateTime>,
}

impl Config {
    pub fn new(author_name: Option<String>, author_date: Option<NaiveDateTime>) -> Self {
        Config {
            author_name,
            author_date,
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// An unparsable `VCS_AUTHOR_DATE` is ignored (with a warning) and the
    /// local clock is used instead.
    pub fn load_from_env() -> Self {
        let author_name = std::env::var(AUTHOR_NAME_ENV)
            .or_else(|_| std::env::var("USER"))
            .ok()
            .filter(|name| !name.trim().is_empty());

        let author_date = std::env::var(AUTHOR_DATE_ENV).ok().and_then(|date| {
            NaiveDateTime::parse_from_str(date.trim(), AUTHOR_DATE_FORMAT)
                .inspect_err(|error| warn!(%date, %error, "ignoring malformed {AUTHOR_DATE_ENV}"))
                .ok()
        });

        Config {
            author_name,
            author_date,
        }
    }

    pub fn author_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Timestamp to stamp on the next commit
    pub fn commit_timestamp(&self) -> NaiveDateTime {
        self.author_date
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}
