//! Mock construction helpers for checker test suites

use govisit_watch::traits::MockPageSession;
use govisit_watch::types::BranchControl;

use super::fixtures::TestFixtures;

/// A page session that navigates and settles cleanly and expects exactly
/// one teardown; branch expectations are layered on by the caller
pub fn settled_page() -> MockPageSession {
    let mut page = MockPageSession::new();
    page.expect_open().returning(|_, _| Ok(()));
    page.expect_wait_for_text().returning(|_, _, _| Ok(()));
    page.expect_close().times(1).returning(|| Ok(()));
    page
}

/// Stub one branch as present with the given `aria-disabled` reading
pub fn stub_control(page: &mut MockPageSession, name: &'static str, disabled_attr: Option<&'static str>) {
    page.expect_find_branch_control()
        .withf(move |query, _| query.name == name)
        .returning(move |_, _| {
            Ok(Some(BranchControl {
                disabled_attr: disabled_attr.map(|s| s.to_string()),
            }))
        });
}

/// Stub one branch as absent from the page
pub fn stub_missing(page: &mut MockPageSession, name: &'static str) {
    page.expect_find_branch_control()
        .withf(move |query, _| query.name == name)
        .returning(|_, _| Ok(None));
}

/// Stub a date-hint fragment for one branch
pub fn stub_date_hint(page: &mut MockPageSession, name: &'static str, hint: Option<&'static str>) {
    page.expect_find_date_hint()
        .withf(move |query, _| query.name == name)
        .returning(move |_, _| Ok(hint.map(|s| s.to_string())));
}

/// The standard three-branch fixture page: one open with a date hint, one
/// closed, one missing
pub fn mixed_page() -> MockPageSession {
    let mut page = settled_page();
    stub_control(&mut page, TestFixtures::BRANCH_OPEN, Some("false"));
    stub_date_hint(&mut page, TestFixtures::BRANCH_OPEN, Some(TestFixtures::DATE_HINT));
    stub_control(&mut page, TestFixtures::BRANCH_CLOSED, Some("true"));
    stub_missing(&mut page, TestFixtures::BRANCH_MISSING);
    page
}
