use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use story_service::config::{GoogleConfig, ModelConfig, StoryConfig};
use story_service::services::providers::mock::MockTextProvider;
use story_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    /// Spawn an app whose generator answers with a valid story for the
    /// default test theme.
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(MockTextProvider::with_response(sample_story_json(
            "a brave robot",
        )))
        .await
    }

    pub async fn spawn_with_provider(provider: MockTextProvider) -> Self {
        let provider = Arc::new(provider);

        let config = StoryConfig {
            common: CoreConfig { port: 0 },
            models: ModelConfig {
                text_model: "gemini-2.0-flash".to_string(),
            },
            google: GoogleConfig {
                api_key: Secret::new("test-api-key".to_string()),
            },
        };

        let app = Application::build_with_provider(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }
}

/// A well-formed generator reply echoing the given theme.
pub fn sample_story_json(theme: &str) -> String {
    serde_json::json!({
        "title": "The Tin Knight",
        "theme": theme,
        "genre": "fantasy",
        "length": "medium",
        "characters": [
            "Bolt, a small service robot with a dented chest plate",
            "Mira, the clockmaker who repairs him"
        ],
        "body": [
            "Bolt had never left the clock tower.",
            "When the great bell cracked, he climbed down into the city.",
            "He returned at dawn, carrying the bell's voice in his chest."
        ],
        "moral": "Courage is doing the job nobody built you for."
    })
    .to_string()
}
