use async_trait::async_trait;
use std::fmt;

use md_core::{Error, LanguageModel, Result};

/// Offline stand-in for a real provider. Echoes a canned analysis, or
/// fails every call when built with `failing()`.
pub struct DummyModel {
    canned: String,
    fail: bool,
}

impl DummyModel {
    pub fn new(canned: impl Into<String>) -> Self {
        Self {
            canned: canned.into(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            canned: String::new(),
            fail: true,
        }
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").field("fail", &self.fail).finish()
    }
}

#[async_trait]
impl LanguageModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, _system: &str, _user: &str, _temperature: f32) -> Result<String> {
        if self.fail {
            return Err(Error::Inference("dummy model configured to fail".to_string()));
        }
        Ok(self.canned.clone())
    }
}
