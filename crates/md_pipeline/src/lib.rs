pub mod mem;

use std::sync::Arc;
use tracing::info;

use md_core::{ArticleAnalyzer, ArticleSource, Result};

/// One formatted output unit handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Article title, rendered as a heading
    Heading(String),
    /// Per-article analysis text
    Analysis(String),
    /// The consolidated cross-article summary
    Summary(String),
    /// Out-of-band status message, e.g. when no articles matched
    Notice(String),
}

/// Rendering surface. The pipeline emits blocks in order and knows nothing
/// about where they end up.
pub trait Sink {
    fn emit(&mut self, block: &Block);
}

/// Linear fetch → analyze → consolidate driver. Articles are analyzed one
/// at a time in fetch order; rendering interleaves with analysis so output
/// order always matches feed order.
pub struct Pipeline {
    source: Arc<dyn ArticleSource>,
    analyzer: Arc<dyn ArticleAnalyzer>,
}

impl Pipeline {
    pub fn new(source: Arc<dyn ArticleSource>, analyzer: Arc<dyn ArticleAnalyzer>) -> Self {
        Self { source, analyzer }
    }

    pub async fn run(&self, sink: &mut dyn Sink) -> Result<()> {
        let articles = self.source.fetch_todays_articles().await?;
        if articles.is_empty() {
            sink.emit(&Block::Notice("No articles published today.".to_string()));
            return Ok(());
        }

        let mut analyses = Vec::with_capacity(articles.len());
        for article in &articles {
            info!("📰 Analyzing: {}", article.title);
            sink.emit(&Block::Heading(article.title.clone()));
            let analysis = self.analyzer.analyze(article).await?;
            sink.emit(&Block::Analysis(analysis.clone()));
            analyses.push(analysis);
        }

        let summary = self.analyzer.consolidate(&analyses).await?;
        sink.emit(&Block::Summary(summary));
        info!("✨ Run complete: {} articles", articles.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use md_core::{Article, Error};
    use std::sync::Mutex;

    struct StaticSource(Vec<Article>);

    #[async_trait]
    impl ArticleSource for StaticSource {
        async fn fetch_todays_articles(&self) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    /// Records every call; optionally fails analysis of one article index.
    struct RecordingAnalyzer {
        fail_at: Option<usize>,
        analyzed: Mutex<Vec<String>>,
        consolidated: Mutex<Vec<Vec<String>>>,
    }

    impl RecordingAnalyzer {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                fail_at,
                analyzed: Mutex::new(Vec::new()),
                consolidated: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ArticleAnalyzer for RecordingAnalyzer {
        async fn analyze(&self, article: &Article) -> Result<String> {
            let mut analyzed = self.analyzed.lock().unwrap();
            if self.fail_at == Some(analyzed.len()) {
                return Err(Error::Inference("provider outage".to_string()));
            }
            analyzed.push(article.title.clone());
            Ok(format!("analysis of {}", article.title))
        }

        async fn consolidate(&self, analyses: &[String]) -> Result<String> {
            self.consolidated.lock().unwrap().push(analyses.to_vec());
            Ok("the summary".to_string())
        }
    }

    #[derive(Default)]
    struct VecSink(Vec<Block>);

    impl Sink for VecSink {
        fn emit(&mut self, block: &Block) {
            self.0.push(block.clone());
        }
    }

    fn articles(titles: &[&str]) -> Vec<Article> {
        titles
            .iter()
            .map(|t| Article {
                title: t.to_string(),
                url: format!("http://example.com/{}", t),
                published_at: Utc::now(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_feed_emits_single_notice_and_no_model_calls() {
        let analyzer = Arc::new(RecordingAnalyzer::new(None));
        let pipeline = Pipeline::new(Arc::new(StaticSource(vec![])), analyzer.clone());
        let mut sink = VecSink::default();

        pipeline.run(&mut sink).await.unwrap();

        assert_eq!(
            sink.0,
            vec![Block::Notice("No articles published today.".to_string())]
        );
        assert!(analyzer.analyzed.lock().unwrap().is_empty());
        assert!(analyzer.consolidated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocks_follow_fetch_order() {
        let analyzer = Arc::new(RecordingAnalyzer::new(None));
        let pipeline = Pipeline::new(
            Arc::new(StaticSource(articles(&["one", "two"]))),
            analyzer.clone(),
        );
        let mut sink = VecSink::default();

        pipeline.run(&mut sink).await.unwrap();

        assert_eq!(
            sink.0,
            vec![
                Block::Heading("one".to_string()),
                Block::Analysis("analysis of one".to_string()),
                Block::Heading("two".to_string()),
                Block::Analysis("analysis of two".to_string()),
                Block::Summary("the summary".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_consolidation_sees_analyses_in_fetch_order() {
        let analyzer = Arc::new(RecordingAnalyzer::new(None));
        let pipeline = Pipeline::new(
            Arc::new(StaticSource(articles(&["a", "b", "c"]))),
            analyzer.clone(),
        );
        let mut sink = VecSink::default();

        pipeline.run(&mut sink).await.unwrap();

        let consolidated = analyzer.consolidated.lock().unwrap();
        assert_eq!(consolidated.len(), 1);
        assert_eq!(
            consolidated[0],
            vec![
                "analysis of a".to_string(),
                "analysis of b".to_string(),
                "analysis of c".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_analysis_failure_prevents_consolidation() {
        // Failure at the second of three articles
        let analyzer = Arc::new(RecordingAnalyzer::new(Some(1)));
        let pipeline = Pipeline::new(
            Arc::new(StaticSource(articles(&["a", "b", "c"]))),
            analyzer.clone(),
        );
        let mut sink = VecSink::default();

        let err = pipeline.run(&mut sink).await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
        assert!(analyzer.consolidated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_at_last_article_still_skips_consolidation() {
        let analyzer = Arc::new(RecordingAnalyzer::new(Some(2)));
        let pipeline = Pipeline::new(
            Arc::new(StaticSource(articles(&["a", "b", "c"]))),
            analyzer.clone(),
        );
        let mut sink = VecSink::default();

        assert!(pipeline.run(&mut sink).await.is_err());
        assert!(analyzer.consolidated.lock().unwrap().is_empty());
        // The two successful analyses were still rendered in order.
        assert_eq!(
            sink.0
                .iter()
                .filter(|b| matches!(b, Block::Analysis(_)))
                .count(),
            2
        );
    }
}
