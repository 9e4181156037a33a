//! Test doubles shared by the app's unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use pagesearch_ai::{AiError, PatternGenerator};

/// Generator that answers every description with the same result and
/// remembers what it was asked.
pub(crate) struct FakeGenerator {
    result: Result<String, AiError>,
    calls: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub(crate) fn returning(pattern: &str) -> Self {
        Self {
            result: Ok(pattern.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: AiError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PatternGenerator for FakeGenerator {
    async fn generate_pattern(&self, description: &str) -> Result<String, AiError> {
        self.calls.lock().unwrap().push(description.to_string());
        self.result.clone()
    }
}
