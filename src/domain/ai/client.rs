use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use crate::utils::error::AppError;

/// Generation client interface.
///
/// A single text-in/text-out method, so the hosted backend can be swapped or
/// replaced with a mock in tests without touching the request handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Arc-wrapped generator handle (Clone support for the app state).
pub type SharedGenerator = Arc<dyn TextGenerator>;

/// OpenAI chat-completion implementation.
///
/// The API key is ambient: the underlying client reads `OPENAI_API_KEY` from
/// the process environment. The call carries no timeout and no retry; a slow
/// upstream holds the request open.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| AppError::Internal(e.to_string()))?
                .into()])
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::CompletionFailed(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AppError::CompletionFailed("no content in completion".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_openai_generator() {
        let generator = OpenAiGenerator::new("o4-mini");

        assert_eq!(generator.model, "o4-mini");
    }

    #[tokio::test]
    async fn mock_generator_should_return_configured_reply() {
        // Arrange
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("ball"))
            .returning(|_| Ok("drop the ball onto the line".to_string()));

        // Act
        let reply = mock.generate("where should the ball go?").await.unwrap();

        // Assert
        assert_eq!(reply, "drop the ball onto the line");
    }
}
