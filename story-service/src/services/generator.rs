//! Story generation service.
//!
//! Bridges the HTTP surface and the text provider: builds the prompt,
//! runs the provider call and turns its raw JSON output into a [`Story`].

use crate::models::Story;
use crate::services::prompt::{StoryLength, build_story_prompt};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;
use thiserror::Error;

/// Failures between "prompt sent" and "typed story in hand".
///
/// The variants matter for logs only; every one of them surfaces to the
/// caller as the same generation-failure envelope.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("Generator returned an empty response")]
    EmptyResponse,

    #[error("Generator returned malformed JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Generator reported an error: {0}")]
    Reported(String),
}

/// Service that turns a validated theme/genre/length triple into a story.
#[derive(Clone)]
pub struct StoryGenerator {
    provider: Arc<dyn TextProvider>,
}

impl StoryGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate a story for the given parameters.
    ///
    /// `length_token` is matched against the known length tokens;
    /// anything unrecognized falls back to a medium-length story.
    pub async fn generate(
        &self,
        theme: &str,
        genre: &str,
        length_token: &str,
    ) -> Result<Story, GeneratorError> {
        let prompt = build_story_prompt(theme, genre, StoryLength::from(length_token));

        let params = GenerationParams {
            json_output: true,
            ..Default::default()
        };

        let response = self.provider.generate(&prompt, &params).await?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Provider call completed"
        );

        let text = response.text.ok_or(GeneratorError::EmptyResponse)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        // A generator that declined the theme reports it in-band.
        if let Some(reported) = value.get("error").and_then(|v| v.as_str()) {
            return Err(GeneratorError::Reported(reported.to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Health check delegated to the underlying provider.
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;

    fn generator_with(provider: MockTextProvider) -> (StoryGenerator, Arc<MockTextProvider>) {
        let provider = Arc::new(provider);
        (StoryGenerator::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn parses_generator_output_into_story() {
        let json = serde_json::json!({
            "title": "The Tin Knight",
            "theme": "a brave robot",
            "genre": "fantasy",
            "length": "medium",
            "characters": ["Bolt, a small service robot"],
            "body": ["Once upon a time...", "And so it went.", "The end."],
        })
        .to_string();
        let (generator, _) = generator_with(MockTextProvider::with_response(json));

        let story = generator
            .generate("a brave robot", "fantasy", "medium")
            .await
            .expect("generation should succeed");

        assert_eq!(story.title, "The Tin Knight");
        assert_eq!(story.theme, "a brave robot");
        assert_eq!(story.body.len(), 3);
        assert!(story.moral.is_none());
    }

    #[tokio::test]
    async fn builds_prompt_from_request_parameters() {
        let (generator, provider) = generator_with(MockTextProvider::with_response("{}"));

        generator
            .generate("a lost lighthouse", "mystery", "long")
            .await
            .expect("generation should succeed");

        let prompts = provider.recorded_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("a long story of 400-500 words"));
        assert!(prompts[0].contains("in the mystery genre"));
        assert!(prompts[0].contains("a lost lighthouse"));
    }

    #[tokio::test]
    async fn provider_failure_is_propagated() {
        let (generator, _) = generator_with(MockTextProvider::failing("quota exceeded"));

        let err = generator
            .generate("a brave robot", "fantasy", "medium")
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Provider(_)));
    }

    #[tokio::test]
    async fn non_json_output_is_an_error() {
        let (generator, _) =
            generator_with(MockTextProvider::with_response("Once upon a time..."));

        let err = generator
            .generate("a brave robot", "fantasy", "medium")
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn in_band_error_payload_is_an_error() {
        let (generator, _) = generator_with(MockTextProvider::with_response(
            r#"{"error": "I only write positive stories."}"#,
        ));

        let err = generator
            .generate("something grim", "horror", "short")
            .await
            .unwrap_err();

        match err {
            GeneratorError::Reported(msg) => {
                assert!(msg.contains("positive stories"));
            }
            other => panic!("expected Reported, got {other:?}"),
        }
    }
}
