pub mod analyzer;
pub mod markdown;
pub mod models;
pub mod prompts;

pub use analyzer::Analyzer;
pub use models::create_model;

pub mod prelude {
    pub use super::analyzer::Analyzer;
    pub use super::models::create_model;
    pub use md_core::{Article, Error, Result};
}
