use std::sync::Arc;

use md_core::{Error, InferenceConfig, LanguageModel, ModelProvider, Result};

pub mod dummy;
pub mod ollama;
pub mod openai;

pub use dummy::DummyModel;
pub use ollama::OllamaModel;
pub use openai::OpenAiModel;

/// Builds the provider binding selected by the configuration.
pub fn create_model(config: &InferenceConfig) -> Result<Arc<dyn LanguageModel>> {
    match config.provider {
        ModelProvider::OpenAi => {
            let api_key = config.api_key.clone().ok_or_else(|| {
                Error::Inference("OpenAI provider selected but no API key configured".to_string())
            })?;
            Ok(Arc::new(OpenAiModel::new(
                api_key,
                config.model.clone(),
                config.endpoint.clone(),
            )))
        }
        ModelProvider::Ollama => Ok(Arc::new(OllamaModel::new(
            config.model.clone(),
            config.endpoint.clone(),
            config.context_length,
        ))),
    }
}
