//! Service implementations
//!
//! Production implementations of the collaborator traits: the WebDriver
//! page session, the SMTP report sender, and the control-file run gate.

pub mod mailer;
pub mod run_gate;
pub mod webdriver;

pub use mailer::SmtpReportSender;
pub use webdriver::{WebDriverBrowser, WebDriverSession};
