//! Checker configuration
//!
//! Settings come from CLI flags and environment variables, resolved once at
//! startup into an explicit [`CheckerConfig`] value. Mail credentials are
//! loaded from:
//! 1. `.env` file in the current directory (if present)
//! 2. System environment variables
//!
//! ## Required variables
//! - `GMAIL_USER`: sender address, also the SMTP username
//! - `GMAIL_APP_PASSWORD`: SMTP app password
//!
//! ## Optional variables
//! - `RECIPIENT_EMAIL`: report recipient, defaults to the sender

use std::time::Duration;

use url::Url;

use crate::error::{CheckerError, CheckerResult};
use crate::types::{BranchQuery, MatchMode};

/// Booking page for the interior-ministry appointment service
pub const DEFAULT_TARGET_URL: &str =
    "https://my.govisit.gov.il/he/app/appointment/262/412010/v2/location";

/// Bureau names as they appear on the page; matching is against live text,
/// so these stay in the page's language
pub const DEFAULT_BRANCHES: &[&str] = &["לשכת רחובות", "לשכת ראשון לציון", "לשכת רמלה"];

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_CONTROL_FILE: &str = "KEEP_RUNNING.txt";

const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP credentials and addressing for the report sender
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub smtp_host: String,
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

impl MailConfig {
    /// Load mail settings from the environment
    pub fn from_env() -> CheckerResult<Self> {
        // Safe to call repeatedly; already-set variables win over .env
        let _ = dotenv::dotenv();

        let sender = require_env("GMAIL_USER")?;
        let password = require_env("GMAIL_APP_PASSWORD")?;
        let recipient = std::env::var("RECIPIENT_EMAIL").unwrap_or_else(|_| sender.clone());

        Ok(Self {
            smtp_host: "smtp.gmail.com".to_string(),
            sender,
            password,
            recipient,
        })
    }
}

fn require_env(name: &str) -> CheckerResult<String> {
    std::env::var(name)
        .map_err(|_| CheckerError::config(name, "required environment variable is not set"))
}

/// Fully resolved configuration for one check run
#[derive(Clone, Debug)]
pub struct CheckerConfig {
    pub target_url: String,
    pub branches: Vec<BranchQuery>,
    pub match_mode: MatchMode,
    pub navigation_timeout: Duration,
    pub settle_timeout: Duration,
    pub webdriver_url: String,
}

impl CheckerConfig {
    /// Build and validate a configuration
    pub fn new(
        target_url: impl Into<String>,
        branch_names: Vec<String>,
        webdriver_url: impl Into<String>,
    ) -> CheckerResult<Self> {
        let target_url = target_url.into();
        Url::parse(&target_url)
            .map_err(|e| CheckerError::config("target_url", e.to_string()))?;

        let webdriver_url = webdriver_url.into();
        Url::parse(&webdriver_url)
            .map_err(|e| CheckerError::config("webdriver_url", e.to_string()))?;

        let branches: Vec<BranchQuery> = branch_names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(BranchQuery::new)
            .collect();

        if branches.is_empty() {
            return Err(CheckerError::config(
                "branches",
                "at least one branch name is required",
            ));
        }

        Ok(Self {
            target_url,
            branches,
            match_mode: MatchMode::default(),
            navigation_timeout: NAVIGATION_TIMEOUT,
            settle_timeout: SETTLE_TIMEOUT,
            webdriver_url,
        })
    }

    /// Default branch list for the stock deployment
    pub fn default_branches() -> Vec<String> {
        DEFAULT_BRANCHES.iter().map(|s| s.to_string()).collect()
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }
}
