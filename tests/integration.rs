//! Checker integration tests with mocked collaborators
//!
//! These exercise the full run: session acquisition, navigation and settle,
//! per-branch classification, aggregation, teardown, and report delivery.

mod common;

use common::helpers::{mixed_page, settled_page, stub_control, stub_date_hint};
use common::TestFixtures;

use govisit_watch::error::CheckerError;
use govisit_watch::traits::{MockBrowserProvider, MockPageSession, MockReportSender};
use govisit_watch::types::RunStatus;
use govisit_watch::Checker;

fn browser_returning(page: MockPageSession) -> MockBrowserProvider {
    let mut browser = MockBrowserProvider::new();
    browser
        .expect_acquire()
        .times(1)
        .return_once(move || Ok(Box::new(page)));
    browser
}

fn quiet_reporter() -> MockReportSender {
    let mut reporter = MockReportSender::new();
    reporter.expect_send_report().returning(|_| Ok(()));
    reporter
}

#[tokio::test]
async fn every_branch_lands_in_exactly_one_bucket() {
    let checker = Checker::new(
        TestFixtures::mixed_config(),
        browser_returning(mixed_page()),
        quiet_reporter(),
    );

    let (result, status) = checker.run().await.unwrap();

    assert_eq!(status, RunStatus::Completed);
    assert_eq!(result.total(), 3);
    assert_eq!(result.available.len(), 1);
    assert_eq!(result.available[0].name, TestFixtures::BRANCH_OPEN);
    assert_eq!(result.available[0].date_hint, TestFixtures::DATE_HINT);
    assert_eq!(result.unavailable.len(), 1);
    assert_eq!(result.unavailable[0].name, TestFixtures::BRANCH_CLOSED);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains(TestFixtures::BRANCH_MISSING));
}

#[tokio::test]
async fn branch_order_follows_the_configured_list() {
    let config = TestFixtures::config_for(&["first", "second"]);
    let mut page = settled_page();
    stub_control(&mut page, "first", Some("false"));
    stub_date_hint(&mut page, "first", None);
    stub_control(&mut page, "second", Some("false"));
    stub_date_hint(&mut page, "second", None);

    let checker = Checker::new(config, browser_returning(page), quiet_reporter());
    let (result, _) = checker.run().await.unwrap();

    let names: Vec<&str> = result.available.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn navigation_timeout_short_circuits_and_releases_once() {
    let mut page = MockPageSession::new();
    page.expect_open()
        .returning(|_, _| Err(CheckerError::page("navigation timed out after 60s")));
    // No branch queries may reach the page after a session fault.
    page.expect_find_branch_control().times(0);
    page.expect_close().times(1).returning(|| Ok(()));

    let checker = Checker::new(
        TestFixtures::mixed_config(),
        browser_returning(page),
        quiet_reporter(),
    );

    let (result, status) = checker.run().await.unwrap();

    assert_eq!(status, RunStatus::SessionFault);
    assert!(result.available.is_empty());
    assert!(result.unavailable.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("navigation timed out"));
}

#[tokio::test]
async fn settle_failure_is_a_session_fault() {
    let mut page = MockPageSession::new();
    page.expect_open().returning(|_, _| Ok(()));
    page.expect_wait_for_text()
        .returning(|_, _, _| Err(CheckerError::page("page did not settle within 30s")));
    page.expect_find_branch_control().times(0);
    page.expect_close().times(1).returning(|| Ok(()));

    let checker = Checker::new(
        TestFixtures::mixed_config(),
        browser_returning(page),
        quiet_reporter(),
    );

    let (result, status) = checker.run().await.unwrap();

    assert_eq!(status, RunStatus::SessionFault);
    assert_eq!(result.errors.len(), 1);
}

#[tokio::test]
async fn acquisition_failure_is_terminal_and_sends_no_report() {
    let mut browser = MockBrowserProvider::new();
    browser.expect_acquire().return_once(|| {
        Err(CheckerError::SessionAcquisition {
            message: "connection refused".to_string(),
        })
    });
    let mut reporter = MockReportSender::new();
    reporter.expect_send_report().times(0);

    let checker = Checker::new(TestFixtures::mixed_config(), browser, reporter);

    let err = checker.run().await.unwrap_err();
    assert!(matches!(err, CheckerError::SessionAcquisition { .. }));
}

#[tokio::test]
async fn teardown_failure_does_not_mask_the_result() {
    let mut page = MockPageSession::new();
    page.expect_open().returning(|_, _| Ok(()));
    page.expect_wait_for_text().returning(|_, _, _| Ok(()));
    stub_control(&mut page, "only", Some("true"));
    page.expect_close()
        .times(1)
        .returning(|| Err(CheckerError::page("session already gone")));

    let checker = Checker::new(
        TestFixtures::config_for(&["only"]),
        browser_returning(page),
        quiet_reporter(),
    );

    let (result, status) = checker.run().await.unwrap();

    assert_eq!(status, RunStatus::Completed);
    assert_eq!(result.unavailable.len(), 1);
}

#[tokio::test]
async fn report_sender_receives_the_aggregate() {
    let mut reporter = MockReportSender::new();
    reporter
        .expect_send_report()
        .times(1)
        .withf(|result| {
            result.available.len() == 1
                && result.unavailable.len() == 1
                && result.errors.len() == 1
        })
        .returning(|_| Ok(()));

    let checker = Checker::new(
        TestFixtures::mixed_config(),
        browser_returning(mixed_page()),
        reporter,
    );

    checker.run().await.unwrap();
}

#[tokio::test]
async fn report_delivery_failure_does_not_fail_the_run() {
    // Only the session-fault path and acquisition failure are caller-visible
    // failures; a mail problem is logged, and the scan results stand.
    let mut reporter = MockReportSender::new();
    reporter.expect_send_report().times(1).returning(|_| {
        Err(CheckerError::ReportDelivery {
            message: "smtp unreachable".to_string(),
        })
    });

    let checker = Checker::new(
        TestFixtures::mixed_config(),
        browser_returning(mixed_page()),
        reporter,
    );

    let (result, status) = checker.run().await.unwrap();
    assert_eq!(status, RunStatus::Completed);
    assert_eq!(result.total(), 3);
}

#[tokio::test]
async fn empty_branch_list_is_a_fault_not_a_panic() {
    // CheckerConfig::new rejects an empty list, but the fields are public,
    // so a literal-constructed config must still degrade gracefully.
    let config = govisit_watch::CheckerConfig {
        target_url: TestFixtures::TARGET_URL.to_string(),
        branches: vec![],
        match_mode: govisit_watch::MatchMode::default(),
        navigation_timeout: std::time::Duration::from_secs(60),
        settle_timeout: std::time::Duration::from_secs(30),
        webdriver_url: TestFixtures::WEBDRIVER_URL.to_string(),
    };

    let mut page = MockPageSession::new();
    page.expect_open().times(0);
    page.expect_find_branch_control().times(0);
    page.expect_close().times(1).returning(|| Ok(()));

    let checker = Checker::new(config, browser_returning(page), quiet_reporter());

    let (result, status) = checker.run().await.unwrap();
    assert_eq!(status, RunStatus::SessionFault);
    assert!(result.available.is_empty());
    assert!(result.unavailable.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("branches"));
}

#[tokio::test]
async fn two_runs_over_the_same_fixture_agree() {
    let make_checker = || {
        Checker::new(
            TestFixtures::mixed_config(),
            browser_returning(mixed_page()),
            quiet_reporter(),
        )
    };

    let (first, _) = make_checker().run().await.unwrap();
    let (second, _) = make_checker().run().await.unwrap();

    assert_eq!(first.available, second.available);
    assert_eq!(first.unavailable, second.unavailable);
    assert_eq!(first.errors, second.errors);
}
