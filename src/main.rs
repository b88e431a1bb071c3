//! Main entry point for the govisit-watch binary
//!
//! Wires the real services together and maps the run status to the process
//! exit code: only a session-level fault (or failure to acquire a browser
//! session at all) fails the run; per-branch problems only show up in the
//! mailed report.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use govisit_watch::{
    config::{self, CheckerConfig, MailConfig},
    logging,
    services::{run_gate, SmtpReportSender, WebDriverBrowser},
    Checker, CheckerError, CheckerResult, RunStatus,
};

/// Checks the GoVisit booking page for open appointment slots and mails a
/// summary report
#[derive(Parser)]
#[command(name = "govisit-watch")]
#[command(about = "Checks GoVisit bureaus for open appointment slots and mails a report")]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Booking page to check
    #[arg(long, default_value = config::DEFAULT_TARGET_URL)]
    pub url: String,

    /// Bureau display names to check, in report order
    #[arg(long, value_delimiter = ',')]
    pub branches: Vec<String>,

    /// WebDriver endpoint (a running chromedriver)
    #[arg(long, default_value = config::DEFAULT_WEBDRIVER_URL)]
    pub webdriver: String,

    /// Control file consulted before running
    #[arg(long, default_value = config::DEFAULT_CONTROL_FILE)]
    pub control_file: PathBuf,

    /// Print the check result as JSON to stdout after the run
    #[arg(long)]
    pub print_json: bool,
}

#[tokio::main]
async fn main() -> CheckerResult<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    if !run_gate::should_run(&args.control_file).await {
        info!(
            file = %args.control_file.display(),
            "disabled by control file, skipping this run"
        );
        return Ok(());
    }

    let branch_names = if args.branches.is_empty() {
        CheckerConfig::default_branches()
    } else {
        args.branches
    };
    let config = CheckerConfig::new(args.url, branch_names, args.webdriver)?;
    let mail = MailConfig::from_env()?;

    let browser = WebDriverBrowser::new(config.webdriver_url.clone());
    let reporter = SmtpReportSender::new(mail, config.target_url.clone());
    let checker = Checker::new(config, browser, reporter);

    let (result, status) = checker.run().await?;

    if args.print_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match status {
        RunStatus::Completed => {
            info!(
                available = result.available.len(),
                unavailable = result.unavailable.len(),
                errors = result.errors.len(),
                "run complete"
            );
            Ok(())
        }
        RunStatus::SessionFault => {
            warn!("run failed before any branch could be checked");
            Err(CheckerError::SessionFault {
                message: result
                    .errors
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "unknown session fault".to_string()),
            })
        }
    }
}
