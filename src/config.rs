use std::time::Duration;

use tracing::warn;

/// Block-level grouping element whose direct text is counted.
pub const CONTAINER_TAG: &str = "div";
pub const TITLE_TAG: &str = "title";

pub const MIN_TERM_WIDTH: usize = 12;
pub const MIN_COUNT_WIDTH: usize = 4;

/// Lines per rayon task when aggregating in parallel.
pub const PARALLEL_CHUNK: usize = 256;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const TIMEOUT_ENV: &str = "TERMFREQ_TIMEOUT_SECS";
const USER_AGENT_ENV: &str = "TERMFREQ_USER_AGENT";

/// Runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub verbose: bool,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Settings {
    pub fn new(url: String, verbose: bool) -> Self {
        Self::with_env(url, verbose, |key| std::env::var(key).ok())
    }

    fn with_env(url: String, verbose: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!("Ignoring invalid {}={:?}, using {}s", TIMEOUT_ENV, raw, DEFAULT_TIMEOUT_SECS);
                    DEFAULT_TIMEOUT_SECS
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent = lookup(USER_AGENT_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("termfreq/{}", env!("CARGO_PKG_VERSION")));

        Settings {
            url,
            verbose,
            timeout: Duration::from_secs(timeout),
            user_agent,
        }
    }
}
