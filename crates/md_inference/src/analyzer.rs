use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use md_core::{Article, ArticleAnalyzer, LanguageModel, Result, ANALYSIS_TEMPERATURE};
use md_extract::Extractor;

use crate::markdown::wrap_dollar_amounts;
use crate::prompts::{article_prompt, summary_prompt};

/// Fixed instruction appended after the joined analyses in the
/// consolidation request.
const CLOSING_INSTRUCTION: &str =
    "Generate the final consolidated summary of the analyses above.";

/// Runs the per-article analysis and the final consolidation against one
/// language model. Extraction failures are absorbed here as skip
/// placeholders; model failures propagate and end the run.
pub struct Analyzer {
    model: Arc<dyn LanguageModel>,
    extractor: Extractor,
    language: String,
}

impl Analyzer {
    pub fn new(model: Arc<dyn LanguageModel>, extractor: Extractor, language: String) -> Self {
        Self {
            model,
            extractor,
            language,
        }
    }

    async fn analyze_content(&self, article: &Article, content: Option<String>) -> Result<String> {
        let Some(content) = content else {
            info!("⏭️ Skipping article without extractable content: {}", article.title);
            return Ok(skip_placeholder(&article.title));
        };

        debug!("🤖 Requesting analysis for: {}", article.title);
        let user = format!(
            "**Title:** {}\n\n**Content:**\n{}",
            article.title, content
        );
        let analysis = self
            .model
            .complete(&article_prompt(&self.language), &user, ANALYSIS_TEMPERATURE)
            .await?;

        Ok(wrap_dollar_amounts(&analysis))
    }
}

#[async_trait]
impl ArticleAnalyzer for Analyzer {
    async fn analyze(&self, article: &Article) -> Result<String> {
        let content = self.extractor.extract(&article.url).await;
        self.analyze_content(article, content).await
    }

    async fn consolidate(&self, analyses: &[String]) -> Result<String> {
        info!("🧠 Consolidating {} analyses", analyses.len());
        self.model
            .complete(
                &summary_prompt(&self.language),
                &build_consolidation_input(analyses),
                ANALYSIS_TEMPERATURE,
            )
            .await
    }
}

fn skip_placeholder(title: &str) -> String {
    format!("**Skipping article:** *{}* (Could not extract content).", title)
}

/// All analyses in their given order, blank-line separated, followed by the
/// closing instruction.
fn build_consolidation_input(analyses: &[String]) -> String {
    format!("{}\n\n{}", analyses.join("\n\n"), CLOSING_INSTRUCTION)
}
