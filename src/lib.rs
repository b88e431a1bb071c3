//! Appointment availability watcher for the GoVisit booking page
//!
//! One stateless pass per invocation: drive a headless browser to the
//! booking page, classify each configured bureau as available or not,
//! and mail a summary report. Collaborators (browser, mail transport)
//! sit behind traits so the decision logic is testable without either.

pub mod checker;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use checker::Checker;
pub use classifier::Classifier;
pub use config::{CheckerConfig, MailConfig};
pub use error::{CheckerError, CheckerResult};
pub use traits::{BrowserProvider, PageSession, ReportSender};
pub use types::{BranchOutcome, BranchQuery, CheckResult, MatchMode, RunStatus};
