use std::str::FromStr;

pub const DEFAULT_FEED_URL: &str = "http://localhost:8080/api/greader.php";
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";

/// Connection settings for the feed aggregation service.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub base_url: String,
    pub auth_token: String,
}

impl FeedConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }
}

/// Which model provider backs the `LanguageModel` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    OpenAi,
    Ollama,
}

impl FromStr for ModelProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ModelProvider::OpenAi),
            "ollama" => Ok(ModelProvider::Ollama),
            other => Err(format!(
                "Unknown provider: {} (expected openai or ollama)",
                other
            )),
        }
    }
}

/// Model selection and output settings, built once at startup and passed
/// into constructors. No component reads process environment directly.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub provider: ModelProvider,
    pub model: String,
    /// Natural language the model is instructed to respond in
    pub language: String,
    pub api_key: Option<String>,
    /// Overrides the provider's default base URL when set
    pub endpoint: Option<String>,
    /// Context window hint for local models (Ollama num_ctx)
    pub context_length: Option<u32>,
}

impl InferenceConfig {
    pub fn new(provider: ModelProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            language: "English".to_string(),
            api_key: None,
            endpoint: None,
            context_length: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_context_length(mut self, context_length: u32) -> Self {
        self.context_length = Some(context_length);
        self
    }
}
