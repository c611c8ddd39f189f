// Single-shot dispatch of a generation request

use log::{error, info, warn};

use crate::api::{GeminiClient, GenerateContentRequest, GenerationConfig, GenerationError};
use crate::models::GenerationOptions;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};

pub const MISSING_KEY_MESSAGE: &str =
    "Error: API_KEY is not configured. Please set the API_KEY environment variable.";

pub const AI_ERROR_PREFIX: &str = "Error from AI:";

pub const SAMPLING: GenerationConfig = GenerationConfig {
    temperature: 0.85,
    top_p: 0.95,
    top_k: 40,
};

/// Issues exactly one request per call and always produces display text.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Option<GeminiClient>,
    model: String,
}

impl Dispatcher {
    /// A dispatcher without a client answers every request with the
    /// configuration error.
    pub const fn new(client: Option<GeminiClient>, model: String) -> Self {
        Self { client, model }
    }

    pub const fn has_credentials(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(&self, options: &GenerationOptions) -> String {
        match self.try_generate(options).await {
            Ok(text) => text,
            Err(GenerationError::MissingApiKey) => MISSING_KEY_MESSAGE.to_string(),
            Err(e) => {
                error!("Error generating content: {e}");
                format!("{AI_ERROR_PREFIX} {e}. Check your API key and network connection.")
            }
        }
    }

    async fn try_generate(&self, options: &GenerationOptions) -> Result<String, GenerationError> {
        let Some(client) = &self.client else {
            warn!("Generation requested without an API key");
            return Err(GenerationError::MissingApiKey);
        };

        let prompt = build_prompt(options);
        let request = GenerateContentRequest::new(&prompt, SYSTEM_INSTRUCTION, SAMPLING);

        info!(
            "Generating {} with {} ({} prompt chars)",
            options.content_type.label().to_lowercase(),
            self.model,
            prompt.chars().count()
        );
        let text = client.generate_content(&self.model, &request).await?;
        info!("Received {} chars", text.chars().count());

        Ok(text)
    }
}
