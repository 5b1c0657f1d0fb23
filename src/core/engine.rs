use crate::config::CheckerConfig;
use crate::core::runner::CheckRunner;
use crate::core::{loader, reporter};
use crate::domain::ports::{BrowserSession, Storage};
use crate::utils::error::Result;

/// Orchestrates one full pass: load records, check them against the
/// browser, print the summary, persist the report.
pub struct CheckEngine<S: Storage> {
    storage: S,
    config: CheckerConfig,
}

impl<S: Storage> CheckEngine<S> {
    pub fn new(storage: S, config: CheckerConfig) -> Self {
        Self { storage, config }
    }

    pub async fn run(&self, browser: &dyn BrowserSession) -> Result<String> {
        // 讀取並解析輸入檔
        tracing::debug!("Reading referral links from {}", self.config.input_file);
        let raw = self.storage.read_file(&self.config.input_file).await?;
        let records = loader::parse_records(&raw)?;

        if records.is_empty() {
            tracing::warn!("No usable referral records in the input file");
        }

        println!("Found {} referral codes to check...", records.len());
        println!("Starting analysis...\n");

        // 逐筆檢查推薦碼
        let runner = CheckRunner::new(browser, &self.config);
        let results = runner.run(records).await;

        reporter::print_summary(&results);

        let report = reporter::render_report(&results);
        self.storage
            .write_file(&self.config.output_file, report.as_bytes())
            .await?;

        let output_path = self.config.output_path().display().to_string();
        tracing::debug!("Report written to {}", output_path);
        Ok(output_path)
    }
}
