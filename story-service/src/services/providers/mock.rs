//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock text provider that returns a canned reply (or canned failure)
/// and records every prompt it receives.
pub struct MockTextProvider {
    reply: Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextProvider {
    /// Provider that always answers with the given text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, in call order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.reply {
            Ok(_) => Ok(()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
