use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Best-effort article body extraction. Any failure (network, parse, empty
/// result) yields `None` so one bad page never aborts a run.
pub struct Extractor {
    client: reqwest::Client,
}

/// Content containers tried in order; the first selector with any paragraph
/// text wins. The bare `body p` fallback catches pages with no semantic
/// markup at all.
const CONTENT_SELECTORS: &[&str] = &[
    "article p",
    "[itemprop='articleBody'] p",
    "main p",
    "body p",
];

impl Extractor {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn extract(&self, url: &str) -> Option<String> {
        let html = match self.download(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("⚠️ Failed to download {}: {}", url, e);
                return None;
            }
        };

        let text = extract_article_text(&html);
        if text.is_none() {
            warn!("⚠️ No extractable content at {}", url);
        }
        text
    }

    async fn download(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("Downloaded {}", url);
        response.text().await
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips a page down to its main paragraph text, joined by blank lines.
fn extract_article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector in CONTENT_SELECTORS {
        let selector = Selector::parse(selector).ok()?;
        let paragraphs: Vec<String> = document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if !paragraphs.is_empty() {
            return Some(paragraphs.join("\n\n"));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_article_paragraphs() {
        let html = r#"
            <html><body>
                <nav><p>Menu item</p></nav>
                <article>
                    <p>Shares of Acme rose 4% on Tuesday.</p>
                    <p>Analysts pointed to strong earnings.</p>
                </article>
            </body></html>
        "#;

        let text = extract_article_text(html).unwrap();
        assert_eq!(
            text,
            "Shares of Acme rose 4% on Tuesday.\n\nAnalysts pointed to strong earnings."
        );
    }

    #[test]
    fn test_falls_back_to_body_paragraphs() {
        let html = "<html><body><p>Plain page.</p><p>Second line.</p></body></html>";
        let text = extract_article_text(html).unwrap();
        assert_eq!(text, "Plain page.\n\nSecond line.");
    }

    #[test]
    fn test_empty_page_yields_none() {
        assert!(extract_article_text("<html><body></body></html>").is_none());
        assert!(extract_article_text("").is_none());
    }

    #[test]
    fn test_whitespace_only_paragraphs_yield_none() {
        let html = "<html><body><article><p>   </p><p>\n</p></article></body></html>";
        assert!(extract_article_text(html).is_none());
    }

    #[test]
    fn test_non_html_input_yields_none() {
        assert!(extract_article_text("{\"not\": \"html\"}").is_none());
    }
}
