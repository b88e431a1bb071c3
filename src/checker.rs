//! Check orchestration
//!
//! One pass per invocation: acquire a browser session, load and settle the
//! booking page, classify every configured branch in order, release the
//! session, and hand the aggregate to the report sender. There is no retry
//! here; the external scheduler owns cadence.

use tracing::{error, info, warn};

use crate::classifier::Classifier;
use crate::config::CheckerConfig;
use crate::error::{CheckerError, CheckerResult};
use crate::traits::{BrowserProvider, PageSession, ReportSender};
use crate::types::{CheckResult, RunStatus};

/// Drives one availability check run with injected collaborators
pub struct Checker<B, R>
where
    B: BrowserProvider,
    R: ReportSender,
{
    config: CheckerConfig,
    browser: B,
    reporter: R,
    classifier: Classifier,
}

impl<B, R> Checker<B, R>
where
    B: BrowserProvider,
    R: ReportSender,
{
    pub fn new(config: CheckerConfig, browser: B, reporter: R) -> Self {
        let classifier = Classifier::new(config.match_mode);
        Self {
            config,
            browser,
            reporter,
            classifier,
        }
    }

    /// One full pass: scan, report, signal
    ///
    /// Errors only when the session cannot be acquired at all; a session
    /// fault after acquisition still yields a deliverable [`CheckResult`]
    /// and is signaled through [`RunStatus`]. A report-delivery problem is
    /// logged, never a run failure.
    pub async fn run(&self) -> CheckerResult<(CheckResult, RunStatus)> {
        let (result, status) = self.scan().await?;

        info!(
            available = result.available.len(),
            unavailable = result.unavailable.len(),
            errors = result.errors.len(),
            "check finished"
        );

        if let Err(e) = self.reporter.send_report(&result).await {
            error!(error = %e, "report delivery failed");
        }
        Ok((result, status))
    }

    /// Acquire a session, classify every branch, release the session
    pub async fn scan(&self) -> CheckerResult<(CheckResult, RunStatus)> {
        let mut page = match self.browser.acquire().await {
            Ok(page) => page,
            Err(e) => {
                error!(error = %e, "could not acquire browser session");
                return Err(e);
            }
        };

        let (result, status) = self.scan_page(page.as_mut()).await;

        // Release on every path; a teardown failure must not mask the result.
        if let Err(e) = page.close().await {
            warn!(error = %e, "browser session teardown failed");
        }

        Ok((result.finish(), status))
    }

    async fn scan_page(&self, page: &mut dyn PageSession) -> (CheckResult, RunStatus) {
        let mut result = CheckResult::new();

        if let Err(e) = self.settle(page).await {
            // The page never loaded; no branch can be meaningfully classified.
            error!(error = %e, "page load failed, skipping branch checks");
            result.errors.push(format!("page load failed: {e}"));
            return (result, RunStatus::SessionFault);
        }

        for query in &self.config.branches {
            info!(branch = %query.name, "checking branch");
            let outcome = self.classifier.classify(page, query).await;
            result.record(outcome);
        }

        (result, RunStatus::Completed)
    }

    async fn settle(&self, page: &mut dyn PageSession) -> CheckerResult<()> {
        // Config validation rejects an empty list, but the fields are public;
        // a run with no branches is a fault, not a panic.
        let probe = self
            .config
            .branches
            .first()
            .ok_or_else(|| CheckerError::config("branches", "no branches configured"))?;

        info!(url = %self.config.target_url, "connecting to booking page");
        page.open(&self.config.target_url, self.config.navigation_timeout)
            .await?;

        // Branch controls render client-side after the document loads, so
        // wait for the first configured branch's text rather than sleeping.
        page.wait_for_text(&probe.name, self.config.match_mode, self.config.settle_timeout)
            .await
    }
}
