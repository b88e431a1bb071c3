//! WebDriver-backed page session
//!
//! Talks to a chromedriver (or any WebDriver endpoint) over fantoccini and
//! maps the checker's page queries onto XPath lookups. The booking page
//! renders each bureau as a `role="radio"` card whose `aria-disabled`
//! attribute carries the selectability state.

use std::time::Duration;

use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use tracing::debug;

use crate::error::{CheckerError, CheckerResult};
use crate::traits::{BrowserProvider, PageSession};
use crate::types::{BranchControl, BranchQuery, MatchMode};

/// Text fragment that precedes the soonest-slot date on an enabled card,
/// as it appears on the live page
const DATE_HINT_MARKER: &str = "התור הפנוי הקרוב";

/// Quote `text` as an XPath string literal, including names that carry
/// both quote characters
fn xpath_literal(text: &str) -> String {
    if !text.contains('"') {
        format!("\"{text}\"")
    } else if !text.contains('\'') {
        format!("'{text}'")
    } else {
        let parts: Vec<String> = text.split('"').map(|p| format!("\"{p}\"")).collect();
        format!("concat({})", parts.join(", '\"', "))
    }
}

/// Predicate over a text node for the given match mode
fn text_predicate(name: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => format!(". = {}", xpath_literal(name)),
        MatchMode::Normalized => {
            let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
            format!("normalize-space(.) = {}", xpath_literal(&collapsed))
        }
    }
}

/// Element holding a text node that matches the branch name
fn branch_text_xpath(name: &str, mode: MatchMode) -> String {
    format!("(//*[text()[{}]])[1]", text_predicate(name, mode))
}

/// Nearest enclosing radio-role card of the matching text node
fn branch_control_xpath(name: &str, mode: MatchMode) -> String {
    format!(
        "{}/ancestor-or-self::div[contains(@role, \"radio\")][1]",
        branch_text_xpath(name, mode)
    )
}

fn date_hint_xpath(name: &str, mode: MatchMode) -> String {
    format!(
        "{}//*[contains(text(), {})]",
        branch_control_xpath(name, mode),
        xpath_literal(DATE_HINT_MARKER)
    )
}

/// Live page session over a WebDriver connection
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Find the first element for `xpath`, mapping "no such element" to None
    async fn find_optional(&mut self, xpath: &str) -> CheckerResult<Option<fantoccini::elements::Element>> {
        match self.client.find(Locator::XPath(xpath)).await {
            Ok(element) => Ok(Some(element)),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(CheckerError::page(e.to_string())),
        }
    }
}

#[async_trait::async_trait]
impl PageSession for WebDriverSession {
    async fn open(&mut self, url: &str, timeout: Duration) -> CheckerResult<()> {
        match tokio::time::timeout(timeout, self.client.goto(url)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(CheckerError::page(format!("navigation failed: {e}"))),
            Err(_) => Err(CheckerError::page(format!(
                "navigation timed out after {}s",
                timeout.as_secs()
            ))),
        }
    }

    async fn wait_for_text(
        &mut self,
        probe_text: &str,
        mode: MatchMode,
        timeout: Duration,
    ) -> CheckerResult<()> {
        let xpath = branch_text_xpath(probe_text, mode);
        debug!(%xpath, "waiting for page to settle");
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::XPath(&xpath))
            .await
            .map(|_| ())
            .map_err(|e| match e {
                CmdError::WaitTimeout => CheckerError::page(format!(
                    "page did not settle within {}s: no element matching \"{probe_text}\"",
                    timeout.as_secs()
                )),
                other => CheckerError::page(other.to_string()),
            })
    }

    async fn find_branch_control(
        &mut self,
        query: &BranchQuery,
        mode: MatchMode,
    ) -> CheckerResult<Option<BranchControl>> {
        // No matching text node at all means the branch is absent, not broken.
        if self.find_optional(&branch_text_xpath(&query.name, mode)).await?.is_none() {
            return Ok(None);
        }

        let control = self
            .find_optional(&branch_control_xpath(&query.name, mode))
            .await?
            .ok_or_else(|| {
                CheckerError::page(format!(
                    "text for \"{}\" found but no enclosing radio control",
                    query.name
                ))
            })?;

        let disabled_attr = control
            .attr("aria-disabled")
            .await
            .map_err(|e| CheckerError::page(e.to_string()))?;

        Ok(Some(BranchControl { disabled_attr }))
    }

    async fn find_date_hint(
        &mut self,
        query: &BranchQuery,
        mode: MatchMode,
    ) -> CheckerResult<Option<String>> {
        let element = match self.find_optional(&date_hint_xpath(&query.name, mode)).await? {
            Some(element) => element,
            None => return Ok(None),
        };

        let text = element
            .text()
            .await
            .map_err(|e| CheckerError::page(e.to_string()))?;
        Ok(Some(text))
    }

    async fn close(&mut self) -> CheckerResult<()> {
        // Client is a cloneable handle; closing any clone ends the session.
        self.client
            .clone()
            .close()
            .await
            .map_err(|e| CheckerError::page(e.to_string()))
    }
}

/// Acquires headless Chrome sessions from a WebDriver endpoint
pub struct WebDriverBrowser {
    webdriver_url: String,
}

impl WebDriverBrowser {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }

    fn capabilities() -> serde_json::map::Map<String, serde_json::Value> {
        let mut caps = serde_json::map::Map::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            serde_json::json!({
                "args": ["--headless=new", "--disable-gpu", "--no-sandbox"]
            }),
        );
        caps
    }
}

#[async_trait::async_trait]
impl BrowserProvider for WebDriverBrowser {
    async fn acquire(&self) -> CheckerResult<Box<dyn PageSession>> {
        let client = ClientBuilder::native()
            .capabilities(Self::capabilities())
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| CheckerError::SessionAcquisition {
                message: format!("webdriver at {}: {e}", self.webdriver_url),
            })?;

        Ok(Box::new(WebDriverSession::new(client)))
    }
}
