use anyhow::Result;

/// Replaces the page's query string and reloads the page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, query: &str) -> Result<()>;
}
