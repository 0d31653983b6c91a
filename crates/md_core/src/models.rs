use async_trait::async_trait;
use std::fmt;

use crate::types::Article;
use crate::Result;

/// A text completion provider. Both hosted chat APIs and local model
/// servers are driven through this one contract; the pipeline never sees
/// which is behind it.
#[async_trait]
pub trait LanguageModel: Send + Sync + fmt::Debug {
    /// Returns the name of the provider binding
    fn name(&self) -> &str;

    /// Generate a completion for a system/user prompt pair
    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String>;
}

/// Produces the day's candidate articles.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch articles published on the current local calendar day, in the
    /// order the upstream service returned them
    async fn fetch_todays_articles(&self) -> Result<Vec<Article>>;
}

/// Per-article analysis and cross-article consolidation.
#[async_trait]
pub trait ArticleAnalyzer: Send + Sync {
    /// Analyze a single article, returning formatted markdown text
    async fn analyze(&self, article: &Article) -> Result<String>;

    /// Consolidate all per-article analyses into one final summary
    async fn consolidate(&self, analyses: &[String]) -> Result<String>;
}
