use crate::config::CheckerConfig;
use crate::core::classifier::{self, PageFacets};
use crate::domain::model::{CheckOutcome, ReferralRecord, ReferralStatus, RunResults};
use crate::domain::ports::BrowserSession;
use crate::utils::error::CheckError;
use std::io::Write;

/// Walks the loaded records through the browser one at a time, in input
/// order, and partitions the outcomes. The browser session is borrowed for
/// the whole run; nothing else touches it.
pub struct CheckRunner<'a> {
    browser: &'a dyn BrowserSession,
    config: &'a CheckerConfig,
}

impl<'a> CheckRunner<'a> {
    pub fn new(browser: &'a dyn BrowserSession, config: &'a CheckerConfig) -> Self {
        Self { browser, config }
    }

    pub async fn run(&self, records: Vec<ReferralRecord>) -> RunResults {
        let total = records.len();
        let mut results = RunResults::default();

        for (i, record) in records.into_iter().enumerate() {
            print!("Checking {}/{}: {} ... ", i + 1, total, record.code);
            let _ = std::io::stdout().flush();

            let status = self.check_record(&record.url).await;
            println!("{}", status.console_label());

            results.push(CheckOutcome { record, status });

            // politeness pause between consecutive checks
            if i + 1 < total {
                tokio::time::sleep(self.config.pacing_delay).await;
            }
        }

        results
    }

    async fn check_record(&self, url: &str) -> ReferralStatus {
        if let Err(e) = self.browser.navigate(url).await {
            match e {
                CheckError::NavigationTimeout { .. } => {
                    tracing::warn!("Timeout loading {}", url);
                }
                _ => tracing::warn!("Browser error for {}: {}", url, e),
            }
            return ReferralStatus::Error;
        }

        // let client-side rendering settle before reading anything
        tokio::time::sleep(self.config.settle_delay).await;

        let text = match self.browser.rendered_text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Could not read page content for {}: {}", url, e);
                return ReferralStatus::Error;
            }
        };

        // title and element reads are best-effort; a failure just narrows
        // the facets the classifier sees
        let title = self.browser.title().await.unwrap_or_default();
        let headings = self
            .browser
            .element_texts(classifier::CANDIDATE_SELECTOR)
            .await
            .unwrap_or_default();

        classifier::classify(
            self.config.credit_amount,
            &PageFacets {
                text,
                title,
                headings,
            },
        )
    }
}
