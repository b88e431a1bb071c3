//! Test fixtures and data shared across test suites

use govisit_watch::config::CheckerConfig;

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    pub const TARGET_URL: &'static str = "https://fixture.test/appointment/location";
    pub const WEBDRIVER_URL: &'static str = "http://localhost:9515";

    pub const BRANCH_OPEN: &'static str = "Rehovot bureau";
    pub const BRANCH_CLOSED: &'static str = "Ramla bureau";
    pub const BRANCH_MISSING: &'static str = "Atlantis bureau";

    pub const DATE_HINT: &'static str = "15/03/2025";

    /// Config naming one branch of each interesting kind, in a fixed order
    pub fn mixed_config() -> CheckerConfig {
        Self::config_for(&[Self::BRANCH_OPEN, Self::BRANCH_CLOSED, Self::BRANCH_MISSING])
    }

    pub fn config_for(branches: &[&str]) -> CheckerConfig {
        CheckerConfig::new(
            Self::TARGET_URL,
            branches.iter().map(|s| s.to_string()).collect(),
            Self::WEBDRIVER_URL,
        )
        .expect("valid test config")
    }
}
