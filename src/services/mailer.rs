//! SMTP report sender
//!
//! Renders the check result with `report` and delivers it over SMTPS
//! (implicit TLS relay) using an app-password credential pair.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::MailConfig;
use crate::error::{CheckerError, CheckerResult};
use crate::report;
use crate::traits::ReportSender;
use crate::types::CheckResult;

/// Delivers the daily report over SMTP
pub struct SmtpReportSender {
    config: MailConfig,
    booking_url: String,
}

impl SmtpReportSender {
    pub fn new(config: MailConfig, booking_url: impl Into<String>) -> Self {
        Self {
            config,
            booking_url: booking_url.into(),
        }
    }

    fn build_message(&self, result: &CheckResult) -> CheckerResult<Message> {
        let from: Mailbox = self
            .config
            .sender
            .parse()
            .map_err(|e| CheckerError::config("GMAIL_USER", format!("{e}")))?;
        let to: Mailbox = self
            .config
            .recipient
            .parse()
            .map_err(|e| CheckerError::config("RECIPIENT_EMAIL", format!("{e}")))?;

        let body = SinglePart::builder()
            .header(ContentType::TEXT_HTML)
            .body(report::render_html(result, &self.booking_url));

        Message::builder()
            .from(from)
            .to(to)
            .subject(report::render_subject(result))
            .singlepart(body)
            .map_err(|e| CheckerError::ReportDelivery {
                message: format!("building message: {e}"),
            })
    }
}

#[async_trait::async_trait]
impl ReportSender for SmtpReportSender {
    async fn send_report(&self, result: &CheckResult) -> CheckerResult<()> {
        let message = self.build_message(result)?;

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
                .map_err(|e| CheckerError::ReportDelivery {
                    message: format!("smtp relay {}: {e}", self.config.smtp_host),
                })?
                .credentials(Credentials::new(
                    self.config.sender.clone(),
                    self.config.password.clone(),
                ))
                .build();

        mailer
            .send(message)
            .await
            .map_err(|e| CheckerError::ReportDelivery {
                message: e.to_string(),
            })?;

        info!(recipient = %self.config.recipient, "report delivered");
        Ok(())
    }
}
