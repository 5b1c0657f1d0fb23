use crate::config::CheckerConfig;
use crate::domain::ports::BrowserSession;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures_util::StreamExt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Headless Chrome session over the DevTools protocol. One page is opened at
/// launch and reused for every navigation; the whole run owns exactly one of
/// these.
pub struct ChromeSession {
    // taken on close so the browser process is released exactly once
    browser: Mutex<Option<Browser>>,
    page: Page,
    handler_task: JoinHandle<()>,
    navigation_timeout: Duration,
}

impl ChromeSession {
    /// Launch a headless browser. Failure here means Chrome/Chromium is
    /// missing or unlaunchable and aborts the whole run.
    pub async fn launch(config: &CheckerConfig) -> Result<Self> {
        let browser_config = BrowserConfig::builder()
            .no_sandbox()
            .build()
            .map_err(|message| CheckError::BrowserError { message })?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // drive the CDP event loop for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while handler.next().await.is_some() {}
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser: Mutex::new(Some(browser)),
            page,
            handler_task,
            navigation_timeout: config.navigation_timeout,
        })
    }

    /// Release the browser process. Safe to call more than once; later calls
    /// are no-ops.
    pub async fn close(&self) {
        if let Some(mut browser) = self.browser.lock().await.take() {
            let _ = browser.close().await;
            let _ = browser.wait().await;
        }
        self.handler_task.abort();
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        match tokio::time::timeout(self.navigation_timeout, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(CheckError::NavigationTimeout {
                seconds: self.navigation_timeout.as_secs(),
            }),
        }
    }

    async fn rendered_text(&self) -> Result<String> {
        // innerText reflects what script execution actually rendered; fall
        // back to the raw markup when the body cannot be read
        let body_text = match self.page.evaluate("document.body.innerText").await {
            Ok(result) => result.into_value::<String>().ok(),
            Err(_) => None,
        };

        match body_text {
            Some(text) => Ok(text.to_lowercase()),
            None => Ok(self.page.content().await?.to_lowercase()),
        }
    }

    async fn title(&self) -> Result<String> {
        Ok(self.page.get_title().await?.unwrap_or_default())
    }

    async fn element_texts(&self, selector: &str) -> Result<Vec<String>> {
        let elements = self.page.find_elements(selector).await?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            if let Ok(Some(text)) = element.inner_text().await {
                texts.push(text);
            }
        }
        Ok(texts)
    }
}
