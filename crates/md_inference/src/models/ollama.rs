use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

use md_core::config::DEFAULT_OLLAMA_URL;
use md_core::{Error, LanguageModel, Result};

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_ctx: Option<u32>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Local model server binding using the Ollama generate API. The generate
/// endpoint takes one flat prompt, so system and user parts are joined.
pub struct OllamaModel {
    client: Client,
    model: String,
    base_url: String,
    context_length: Option<u32>,
}

impl OllamaModel {
    pub fn new(model: String, endpoint: Option<String>, context_length: Option<u32>) -> Self {
        Self {
            client: Client::new(),
            model,
            base_url: endpoint.unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
            context_length,
        }
    }
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("context_length", &self.context_length)
            .finish()
    }
}

#[async_trait]
impl LanguageModel for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: format!("{}\n\n{}", system, user),
            stream: false,
            options: GenerateOptions {
                temperature,
                num_ctx: self.context_length,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "generate returned {}: {}",
                status, body
            )));
        }

        let parsed = response.json::<GenerateResponse>().await?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_ctx_omitted_when_unset() {
        let options = GenerateOptions {
            temperature: 0.3,
            num_ctx: None,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(!json.contains("num_ctx"));

        let options = GenerateOptions {
            temperature: 0.3,
            num_ctx: Some(4096),
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"num_ctx\":4096"));
    }
}
