use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use thiserror::Error;
use tracing::info;

/// Chat completion endpoint of Groq's OpenAI-compatible API
const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used for every summarization call
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes meeting notes according to user instructions.";

/// Substituted when the caller provides no instructions
const DEFAULT_INSTRUCTIONS: &str = "Provide a concise summary";

#[derive(Debug, Error)]
pub enum LlmError {
    /// The request never completed (connection, DNS, timeout)
    #[error("Failed to reach LLM API: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("LLM API error: {0}")]
    Api(String),

    /// The response body could not be decoded
    #[error("Failed to decode LLM response: {0}")]
    Decode(String),

    /// The response carried no completion choices
    #[error("LLM response contained no choices")]
    NoChoices,
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        LlmError::Request(error.to_string())
    }
}

/// Client for the Groq chat completion API.
///
/// Constructed once at startup and shared by all requests; the underlying
/// reqwest client pools connections internally. Stateless otherwise.
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl LlmClient {
    /// Create a client against the Groq API.
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, GROQ_API_URL.to_string())
    }

    /// Create a client against any OpenAI-compatible chat completion endpoint.
    pub fn with_endpoint(api_key: String, api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: GROQ_MODEL.to_string(),
            api_url,
        }
    }

    /// Build the two-message prompt: a fixed system instruction plus a user
    /// message embedding the transcript. Absent or blank instructions fall
    /// back to a default phrase.
    pub fn build_prompt(transcript: &str, instructions: Option<&str>) -> Vec<ChatMessage> {
        let instructions = instructions
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DEFAULT_INSTRUCTIONS);

        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Meeting transcript:\n{transcript}\n\nInstructions: {instructions}"
            )),
        ]
    }

    /// Generate a summary for `transcript`. One outbound call, no retry; any
    /// upstream failure is surfaced as a single descriptive error.
    pub async fn summarize(
        &self,
        transcript: &str,
        instructions: Option<&str>,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: Self::build_prompt(transcript, instructions),
        };

        info!(
            "Requesting summary from {} ({} transcript chars)",
            self.model,
            transcript.len()
        );

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        let summary = completion.first_content().ok_or(LlmError::NoChoices)?;

        info!("Summary generated ({} chars)", summary.len());

        Ok(summary)
    }
}
