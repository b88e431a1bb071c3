//! Core result types for the availability check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder hint used when an available branch exposes no date fragment
pub const DATE_HINT_PLACEHOLDER: &str = "date not available";

/// How branch display names are matched against live page text
///
/// The live page's text drifts (padding, non-breaking spaces), so exact
/// equality is fragile. `Normalized` collapses whitespace on both sides
/// before comparing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    Exact,
    Normalized,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Normalized
    }
}

/// One branch to look up on the booking page, identified by its display text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchQuery {
    pub name: String,
}

impl BranchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for BranchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Raw observation of a branch's selectable control on the page
///
/// Produced by the page layer; the classifier turns it into a
/// [`BranchOutcome`]. `disabled_attr` is the control's `aria-disabled`
/// value as found, unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchControl {
    pub disabled_attr: Option<String>,
}

/// Classification result for a single branch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BranchOutcome {
    /// The branch's control is enabled; slots can be booked
    Available { name: String, date_hint: String },
    /// The branch is listed but its control is disabled
    Unavailable { name: String },
    /// No element matching the branch name appeared on the page
    NotFound { name: String },
    /// A fault occurred while inspecting this branch
    CheckError { name: String, message: String },
}

impl BranchOutcome {
    pub fn name(&self) -> &str {
        match self {
            BranchOutcome::Available { name, .. }
            | BranchOutcome::Unavailable { name }
            | BranchOutcome::NotFound { name }
            | BranchOutcome::CheckError { name, .. } => name,
        }
    }
}

/// An available branch with its best-effort date hint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableBranch {
    pub name: String,
    pub date_hint: String,
}

/// An unavailable branch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableBranch {
    pub name: String,
}

/// Aggregate produced once per run and handed to the report sender
///
/// Every configured branch contributes to exactly one of `available`,
/// `unavailable`, or `errors`; a session-level fault contributes a single
/// `errors` entry instead. Order follows the configured branch list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub available: Vec<AvailableBranch>,
    pub unavailable: Vec<UnavailableBranch>,
    pub errors: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self {
            available: Vec::new(),
            unavailable: Vec::new(),
            errors: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Route one branch outcome into the aggregate
    pub fn record(&mut self, outcome: BranchOutcome) {
        match outcome {
            BranchOutcome::Available { name, date_hint } => {
                self.available.push(AvailableBranch { name, date_hint });
            }
            BranchOutcome::Unavailable { name } => {
                self.unavailable.push(UnavailableBranch { name });
            }
            BranchOutcome::NotFound { name } => {
                self.errors.push(format!("branch not found: {name}"));
            }
            BranchOutcome::CheckError { name, message } => {
                self.errors.push(format!("error checking {name}: {message}"));
            }
        }
    }

    /// Stamp the aggregate with the completion instant
    pub fn finish(mut self) -> Self {
        self.timestamp = Utc::now();
        self
    }

    pub fn total(&self) -> usize {
        self.available.len() + self.unavailable.len() + self.errors.len()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Overall run signal for the caller, distinct from per-branch outcomes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The page loaded and every branch was classified
    Completed,
    /// Navigation or the settle wait failed; no branch was classified
    SessionFault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_routes_each_variant_to_one_bucket() {
        let mut result = CheckResult::new();
        result.record(BranchOutcome::Available {
            name: "A".to_string(),
            date_hint: "15/03/2025".to_string(),
        });
        result.record(BranchOutcome::Unavailable { name: "B".to_string() });
        result.record(BranchOutcome::NotFound { name: "C".to_string() });
        result.record(BranchOutcome::CheckError {
            name: "D".to_string(),
            message: "boom".to_string(),
        });

        assert_eq!(result.available.len(), 1);
        assert_eq!(result.unavailable.len(), 1);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.total(), 4);
        assert!(result.errors[0].contains("C"));
        assert!(result.errors[1].contains("D"));
        assert!(result.errors[1].contains("boom"));
    }

    #[test]
    fn outcome_name_is_uniform_across_variants() {
        let outcomes = [
            BranchOutcome::Available {
                name: "X".to_string(),
                date_hint: DATE_HINT_PLACEHOLDER.to_string(),
            },
            BranchOutcome::Unavailable { name: "X".to_string() },
            BranchOutcome::NotFound { name: "X".to_string() },
            BranchOutcome::CheckError {
                name: "X".to_string(),
                message: "m".to_string(),
            },
        ];
        for outcome in &outcomes {
            assert_eq!(outcome.name(), "X");
        }
    }

    #[test]
    fn check_result_serializes_with_kind_tags() {
        let mut result = CheckResult::new();
        result.record(BranchOutcome::Available {
            name: "A".to_string(),
            date_hint: "15/03/2025".to_string(),
        });
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"available\""));
        assert!(json.contains("15/03/2025"));
    }
}
