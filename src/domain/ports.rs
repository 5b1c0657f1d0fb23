use crate::utils::error::Result;
use async_trait::async_trait;

/// A headless, JavaScript-executing browser the runner drives. Modeled as a
/// port so checks can run against a scripted fake in tests.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Drive the session's page to `url`, waiting for the navigation to
    /// commit or the configured timeout to elapse.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Visible text of the document body after script execution, lower-cased.
    /// Falls back to the raw page markup when the body cannot be read.
    async fn rendered_text(&self) -> Result<String>;

    /// Page title, empty when the document has none.
    async fn title(&self) -> Result<String>;

    /// Inner text of every element matching a CSS selector list, in
    /// document order.
    async fn element_texts(&self, selector: &str) -> Result<Vec<String>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
