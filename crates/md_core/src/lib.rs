pub mod config;
pub mod error;
pub mod models;
pub mod types;

pub use config::{FeedConfig, InferenceConfig, ModelProvider};
pub use error::Error;
pub use models::{ArticleAnalyzer, ArticleSource, LanguageModel};
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

/// Generation temperature used for every model call. Low randomness keeps
/// per-article analyses stable across reruns of the same feed.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
