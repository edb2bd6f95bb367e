use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use exam_core::model::Question;

use super::config::GeneratorConfig;
use super::payload::parse_questions;
use super::prompt::build_prompt;
use super::{GenerationScope, QuestionGenerator};
use crate::error::GenerationError;

const SYSTEM_PROMPT: &str =
    "You write exam-preparation questions for the IRDAI IC38 insurance agent certification. \
     You always answer with JSON only.";

/// Generator backed by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct HttpQuestionGenerator {
    client: Client,
    config: Option<GeneratorConfig>,
}

impl HttpQuestionGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeneratorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn config(&self) -> Option<&GeneratorConfig> {
        self.config.as_ref()
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` before any I/O when no
    /// credential is configured, otherwise transport, status or schema errors.
    async fn generate(&self, scope: &GenerationScope) -> Result<Vec<Question>, GenerationError> {
        let config = self
            .config
            .as_ref()
            .ok_or(GenerationError::Configuration)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(scope),
                },
            ],
            temperature: config.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(model = %config.model, expected = scope.expected_count(), "requesting questions");
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .timeout(config.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        let questions = parse_questions(&content, scope.expected_count())?;
        Ok(questions)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
