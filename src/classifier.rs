//! Branch availability classification
//!
//! Turns raw page observations into exactly one [`BranchOutcome`] per
//! branch. All page-layer faults are absorbed here: a broken control for
//! one branch must never abort the scan of the remaining branches.

use tracing::{debug, warn};

use crate::traits::PageSession;
use crate::types::{BranchOutcome, BranchQuery, MatchMode, DATE_HINT_PLACEHOLDER};

/// Classifies one branch at a time against an already-settled page
#[derive(Clone, Copy, Debug)]
pub struct Classifier {
    mode: MatchMode,
}

impl Classifier {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Inspect one branch's control and classify its availability
    ///
    /// Never returns an error: page faults become
    /// [`BranchOutcome::CheckError`], an absent control becomes
    /// [`BranchOutcome::NotFound`].
    pub async fn classify(
        &self,
        page: &mut dyn PageSession,
        query: &BranchQuery,
    ) -> BranchOutcome {
        match self.classify_inner(page, query).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(branch = %query.name, error = %err, "branch check failed");
                BranchOutcome::CheckError {
                    name: query.name.clone(),
                    message: err.to_string(),
                }
            }
        }
    }

    async fn classify_inner(
        &self,
        page: &mut dyn PageSession,
        query: &BranchQuery,
    ) -> crate::error::CheckerResult<BranchOutcome> {
        let control = match page.find_branch_control(query, self.mode).await? {
            Some(control) => control,
            None => {
                debug!(branch = %query.name, "no element matching branch name");
                return Ok(BranchOutcome::NotFound {
                    name: query.name.clone(),
                });
            }
        };

        // aria-disabled="false" is the only reading that means bookable;
        // a missing or ambiguous attribute counts as unavailable.
        if control.disabled_attr.as_deref() != Some("false") {
            debug!(branch = %query.name, attr = ?control.disabled_attr, "branch unavailable");
            return Ok(BranchOutcome::Unavailable {
                name: query.name.clone(),
            });
        }

        // The date hint is advisory; its absence is not an error.
        let date_hint = match page.find_date_hint(query, self.mode).await {
            Ok(Some(text)) => text,
            Ok(None) => DATE_HINT_PLACEHOLDER.to_string(),
            Err(err) => {
                debug!(branch = %query.name, error = %err, "date hint lookup failed");
                DATE_HINT_PLACEHOLDER.to_string()
            }
        };

        debug!(branch = %query.name, date_hint = %date_hint, "branch available");
        Ok(BranchOutcome::Available {
            name: query.name.clone(),
            date_hint,
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}
