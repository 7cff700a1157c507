//! Everything that knows the tracking site's page structure.
//!
//! The workflow only talks to a [`TrackingSession`]; the CSS selectors live in [`Selectors`] so an
//! upstream markup change is a one-line fix here.

use crate::{Result, extract::TEXT_SELECTOR};
use async_trait::async_trait;
use derive_builder::Builder;
use getset::Getters;
use std::time::Duration;

pub mod chrome;
pub use chrome::ChromeSession;

#[cfg(test)]
use mockall::automock;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
pub const AUTOMATION_FLAG: &str = "--disable-blink-features=AutomationControlled";

#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[getset(get = "pub")]
pub struct Selectors {
    /// Text boxes of the tracking form: order id first, postal code second.
    #[builder(default = "String::from(\"input.textBox\")")]
    form_fields: String,
    #[builder(default = "String::from(\"button\")")]
    submit: String,
    /// Either of these shows up once the site has answered.
    #[builder(default = "String::from(\".result-container, .gwt-Label\")")]
    result: String,
    #[builder(default = "String::from(TEXT_SELECTOR)")]
    text: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            form_fields: String::from("input.textBox"),
            submit: String::from("button"),
            result: String::from(".result-container, .gwt-Label"),
            text: String::from(TEXT_SELECTOR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LaunchOptions {
    #[builder(default = "true")]
    pub headless: bool,
    #[builder(default = "String::from(USER_AGENT)")]
    pub user_agent: String,
    #[builder(default = "vec![String::from(AUTOMATION_FLAG)]")]
    pub args: Vec<String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            user_agent: String::from(USER_AGENT),
            args: vec![String::from(AUTOMATION_FLAG)],
        }
    }
}

/// One open page on the tracking site.
///
/// Implementations own the underlying browser. [`close`](TrackingSession::close) releases it and
/// is called exactly once by whoever launched the session.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrackingSession: Send {
    /// Loads `url` and waits for the navigation to finish.
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Types the order id and postal code into the first two form fields, one character at a
    /// time. Fails with `FormFieldsNotFound` when there are fewer than two fields.
    async fn fill_form(
        &mut self,
        order_id: &str,
        postal_code: &str,
        keystroke_delay: Duration,
    ) -> Result<()>;

    /// Clicks the submit button from inside the page. Fails with `SubmitButtonNotFound`.
    async fn submit(&mut self) -> Result<()>;

    /// Waits for the result region. `Ok(false)` means it did not show up within `timeout`.
    async fn wait_for_result(&mut self, timeout: Duration, poll_interval: Duration)
        -> Result<bool>;

    async fn reload(&mut self) -> Result<()>;

    /// Trimmed, non-empty text of the text elements, in document order.
    async fn text_blocks(&mut self) -> Result<Vec<String>>;

    async fn close(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults_match_site() {
        let selectors = SelectorsBuilder::default().build().unwrap();
        assert_eq!(selectors, Selectors::default());
        assert_eq!(selectors.form_fields(), "input.textBox");
        assert_eq!(selectors.submit(), "button");
        assert_eq!(selectors.result(), ".result-container, .gwt-Label");
        assert_eq!(selectors.text(), "div, p, span");
    }

    #[test]
    fn launch_defaults_hide_automation() {
        let options = LaunchOptionsBuilder::default().build().unwrap();
        assert_eq!(options, LaunchOptions::default());
        assert!(options.headless);
        assert!(options.args.iter().any(|a| a == AUTOMATION_FLAG));
        assert!(options.user_agent.starts_with("Mozilla/5.0"));
    }
}
