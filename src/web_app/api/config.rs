// web_app/api/config.rs - Scraper configuration
//
// Values come from the environment (optionally a .env file) and fall back to
// defaults that target the French marketplace.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.amazon.fr";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Clone, Debug, PartialEq)]
pub struct ScraperConfig {
    /// Marketplace origin, without trailing slash
    pub base_url: String,
    /// Per-page request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Reads `SCRAPER_BASE_URL`, `SCRAPER_TIMEOUT_SECS` and `SCRAPER_USER_AGENT`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("SCRAPER_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let timeout = match non_empty("SCRAPER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Invalid SCRAPER_TIMEOUT_SECS '{}', using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let user_agent = non_empty("SCRAPER_USER_AGENT").unwrap_or(defaults.user_agent);

        Self {
            base_url,
            timeout,
            user_agent,
        }
    }
}
