use super::{LaunchOptions, Selectors, TrackingSession};
use crate::{
    Error, Result,
    error::{FormFieldsNotFoundSnafu, NavigationFailedSnafu, SubmitButtonNotFoundSnafu},
};
use async_trait::async_trait;
use chromiumoxide::{
    browser::{Browser, BrowserConfig},
    page::Page,
};
use futures::StreamExt;
use log::{debug, warn};
use snafu::ResultExt;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{Instant, sleep},
};

const CLICK_FROM_PAGE: &str = "function() { this.scrollIntoView(); this.click(); }";

/// A headless Chromium with a single page, driven over the DevTools protocol.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    selectors: Selectors,
}

impl ChromeSession {
    pub async fn launch(options: &LaunchOptions, selectors: Selectors) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .args(options.args.iter())
            .arg(format!("--user-agent={}", options.user_agent));
        builder = if options.headless {
            builder.new_headless_mode()
        } else {
            builder.with_head()
        };
        let config = builder.build().map_err(Error::simple)?;

        let (mut browser, mut events) = Browser::launch(config).await?;
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if let Err(error) = event {
                    debug!("Browser event error: {error}");
                }
            }
        });

        match browser.new_page("about:blank").await {
            Ok(page) => Ok(Self {
                browser,
                page,
                handler,
                selectors,
            }),
            Err(error) => {
                if let Err(close_error) = browser.close().await {
                    warn!("Failed to close browser: {close_error}");
                }
                handler.abort();
                Err(error.into())
            }
        }
    }

    async fn has_result(&self) -> bool {
        self.page
            .find_elements(self.selectors.result().as_str())
            .await
            .is_ok_and(|found| !found.is_empty())
    }
}

#[async_trait]
impl TrackingSession for ChromeSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .context(NavigationFailedSnafu { url })?;
        Ok(())
    }

    async fn fill_form(
        &mut self,
        order_id: &str,
        postal_code: &str,
        keystroke_delay: Duration,
    ) -> Result<()> {
        let selector = self.selectors.form_fields();
        let fields = self.page.find_elements(selector.as_str()).await?;
        if fields.len() < 2 {
            return FormFieldsNotFoundSnafu {
                selector,
                found: fields.len(),
            }
            .fail();
        }
        for (field, value) in fields.iter().zip([order_id, postal_code]) {
            // Focus only: a mouse click would land on whatever overlay covers the field.
            field.focus().await?;
            for c in value.chars() {
                field.type_str(c.to_string()).await?;
                sleep(keystroke_delay).await;
            }
        }
        Ok(())
    }

    async fn submit(&mut self) -> Result<()> {
        let selector = self.selectors.submit();
        let button = self
            .page
            .find_elements(selector.as_str())
            .await?
            .into_iter()
            .next();
        let Some(button) = button else {
            return SubmitButtonNotFoundSnafu { selector }.fail();
        };
        // A script click goes through even when an overlay covers the button.
        button.call_js_fn(CLICK_FROM_PAGE, false).await?;
        Ok(())
    }

    async fn wait_for_result(
        &mut self,
        timeout: Duration,
        poll_interval: Duration,
    ) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.has_result().await {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(poll_interval).await;
        }
    }

    async fn reload(&mut self) -> Result<()> {
        self.page.reload().await?;
        Ok(())
    }

    async fn text_blocks(&mut self) -> Result<Vec<String>> {
        let script = format!(
            "Array.from(document.querySelectorAll({})).map(el => (el.innerText || '').trim()).filter(text => text.length > 0)",
            serde_json::to_string(self.selectors.text())?
        );
        let blocks = self.page.evaluate(script).await?.into_value()?;
        Ok(blocks)
    }

    async fn close(&mut self) -> Result<()> {
        let closed = self.browser.close().await;
        self.handler.abort();
        closed?;
        self.browser.wait().await?;
        Ok(())
    }
}
