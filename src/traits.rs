//! Trait definitions with mockall annotations for testing
//!
//! These are the dependency-injection seams of the checker: the browser
//! session, the page queries the classifier issues against it, and the
//! report sender. Production implementations live in `services`.

use std::time::Duration;

use crate::error::CheckerResult;
use crate::types::{BranchControl, BranchQuery, CheckResult, MatchMode};

/// One rendered page within an acquired browser session
///
/// The classifier only ever issues read-only queries through this trait;
/// navigation and teardown belong to the orchestrator. Implementations map
/// the queries onto whatever engine renders the page.
#[mockall::automock]
#[async_trait::async_trait]
pub trait PageSession: Send {
    /// Navigate to `url`, bounded by `timeout`
    async fn open(&mut self, url: &str, timeout: Duration) -> CheckerResult<()>;

    /// Wait until a text node matching `probe_text` is present, bounded by
    /// `timeout`
    ///
    /// Replaces a fixed post-load sleep: the page renders branch controls
    /// client-side, so readiness is "the first branch's text exists", not
    /// "the network went idle some time ago".
    async fn wait_for_text(
        &mut self,
        probe_text: &str,
        mode: MatchMode,
        timeout: Duration,
    ) -> CheckerResult<()>;

    /// Locate the selectable control enclosing the first text node matching
    /// the branch name
    ///
    /// Returns `Ok(None)` when no such text node exists on the page.
    async fn find_branch_control(
        &mut self,
        query: &BranchQuery,
        mode: MatchMode,
    ) -> CheckerResult<Option<BranchControl>>;

    /// Inner text of the "nearest available appointment" fragment inside the
    /// branch's control region, if present
    async fn find_date_hint(
        &mut self,
        query: &BranchQuery,
        mode: MatchMode,
    ) -> CheckerResult<Option<String>>;

    /// Tear down the underlying browser session
    async fn close(&mut self) -> CheckerResult<()>;
}

/// Browser session acquisition seam
#[mockall::automock]
#[async_trait::async_trait]
pub trait BrowserProvider: Send + Sync {
    /// Acquire a fresh page session
    ///
    /// Failure here is terminal for the run; no CheckResult is produced.
    async fn acquire(&self) -> CheckerResult<Box<dyn PageSession>>;
}

/// Outbound report delivery seam
///
/// The checker hands over the finished [`CheckResult`] by reference; how it
/// is rendered and transported is the implementation's business.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ReportSender: Send + Sync {
    async fn send_report(&self, result: &CheckResult) -> CheckerResult<()>;
}
