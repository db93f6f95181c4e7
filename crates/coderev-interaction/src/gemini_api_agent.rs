//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Calls `generateContent` with the whole conversation on every request;
//! the API itself keeps no chat state.

use async_trait::async_trait;
use coderev_core::config::ModelConfig;
use coderev_core::secret::SecretService;
use coderev_core::{ChatBackend, Result, ReviewError, Turn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Chat backend that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model config.
    ///
    /// Fails with an initialization error when the key or model name is blank
    /// or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: &ModelConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ReviewError::initialization("Gemini API key is empty"));
        }
        if config.name.trim().is_empty() {
            return Err(ReviewError::initialization("Gemini model name is empty"));
        }

        let client = Client::builder().build().map_err(|e| {
            ReviewError::initialization(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_key,
            model: config.name.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves the credential through `secrets` and builds the agent.
    ///
    /// A model name stored next to the key in `secret.json` takes precedence
    /// over the one from `config`.
    pub async fn try_from_secrets(
        secrets: &dyn SecretService,
        config: &ModelConfig,
    ) -> Result<Self> {
        let secret_config = secrets.load_secrets().await.map_err(|e| {
            ReviewError::initialization(format!("Failed to load secrets: {e}"))
        })?;

        let gemini = secret_config.gemini.ok_or_else(|| {
            ReviewError::initialization(
                "Gemini API key not configured (set GEMINI_API_KEY or secret.json)",
            )
        })?;

        let mut config = config.clone();
        if let Some(model_name) = gemini.model_name.filter(|m| !m.trim().is_empty()) {
            config.name = model_name;
        }

        Self::new(gemini.api_key, &config)
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                ReviewError::response(format!("Gemini API request failed: {}", err.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ReviewError::response(format!("Failed to parse Gemini response: {}", err.without_url()))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ChatBackend for GeminiApiAgent {
    fn model(&self) -> &str {
        &self.model
    }

    async fn send_chat(
        &self,
        history: &[Turn],
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String> {
        let request = GenerateContentRequest::new(history, system_instruction, prompt);
        tracing::debug!(
            "[GeminiApiAgent] generateContent model={} contents={}",
            self.model,
            request.contents.len()
        );
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

impl GenerateContentRequest {
    /// Lays out prior turns as alternating user/model contents, then the prompt.
    fn new(history: &[Turn], system_instruction: &str, prompt: &str) -> Self {
        let mut contents = Vec::with_capacity(history.len() * 2 + 1);
        for turn in history {
            contents.push(Content::text(Some(ROLE_USER), &turn.prompt));
            contents.push(Content::text(Some(ROLE_MODEL), &turn.reply));
        }
        contents.push(Content::text(Some(ROLE_USER), prompt));

        let system_instruction = (!system_instruction.trim().is_empty())
            .then(|| Content::text(None, system_instruction));

        Self {
            contents,
            system_instruction,
        }
    }
}

const ROLE_USER: &str = "user";
const ROLE_MODEL: &str = "model";

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            let text: String = content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect();
            (!text.is_empty()).then_some(text)
        })
        .ok_or_else(|| {
            ReviewError::response("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: &str) -> ReviewError {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.to_string());

    ReviewError::response(format!("Gemini API returned {}: {message}", status.as_u16()))
}
