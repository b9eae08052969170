/// LLM Client: the single point of entry for all OpenAI API calls in Skill It.
///
/// ARCHITECTURAL RULE: No other module may call the model API directly.
/// Chat completions and speech transcription both go through this module.
///
/// Models are hardcoded per call site (see the constants below) to prevent drift.
use bytes::Bytes;
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TRANSCRIPTIONS_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Question and quiz generation.
pub const CHAT_MODEL: &str = "gpt-4o-mini";
/// Interview answer analysis.
pub const ANALYSIS_MODEL: &str = "gpt-4o";
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Per-call sampling settings.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl LlmResponse {
    /// Text of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Transcription {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by all services in Skill It.
/// Wraps the chat-completions and transcription endpoints with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Sends the request built by `build`, retrying on 429 (rate limit) and
    /// 5xx errors with exponential backoff. The builder runs once per attempt.
    async fn send_with_retry<F>(&self, build: F) -> Result<Response, LlmError>
    where
        F: Fn() -> Result<RequestBuilder, LlmError>,
    {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match build()?.bearer_auth(&self.api_key).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Makes a raw chat-completion call, returning the full response object.
    pub async fn call(
        &self,
        system: &str,
        prompt: &str,
        options: ChatOptions,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = ChatRequest {
            model: options.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .send_with_retry(|| Ok(self.client.post(CHAT_COMPLETIONS_URL).json(&request_body)))
            .await?;
        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded ({}): prompt_tokens={}, completion_tokens={}",
                options.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the chat model and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        system: &str,
        prompt: &str,
        options: ChatOptions,
    ) -> Result<T, LlmError> {
        let response = self.call(system, prompt, options).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    /// Speech-to-text for a recorded answer. Returns the transcript.
    pub async fn transcribe(
        &self,
        audio: Bytes,
        filename: &str,
        mime: &str,
    ) -> Result<String, LlmError> {
        debug!("Transcribing {} bytes of {mime}", audio.len());

        let response = self
            .send_with_retry(|| {
                let form = transcription_form(&audio, filename, mime)?;
                Ok(self.client.post(TRANSCRIPTIONS_URL).multipart(form))
            })
            .await?;

        let transcription: Transcription = response.json().await?;
        Ok(transcription.text.trim().to_string())
    }
}

/// Multipart body for the transcription endpoint. The audio part carries its
/// length so the upload is sent with a Content-Length instead of chunked.
fn transcription_form(
    audio: &Bytes,
    filename: &str,
    mime: &str,
) -> Result<multipart::Form, LlmError> {
    let file = multipart::Part::stream_with_length(audio.clone(), audio.len() as u64)
        .file_name(filename.to_string())
        .mime_str(mime)?;
    Ok(multipart::Form::new()
        .part("file", file)
        .text("model", TRANSCRIPTION_MODEL))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_response_text_takes_first_choice() {
        let response: LlmResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"{\"a\":1}"}}],
                "usage":{"prompt_tokens":10,"completion_tokens":4}}"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_text_empty_when_no_content() {
        let response: LlmResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert!(response.text().is_none());

        let none: LlmResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(none.text().is_none());
    }

    #[test]
    fn test_transcription_upload_has_content_length() {
        let audio = Bytes::from_static(b"RIFF....WAVEfmt ");
        let form = transcription_form(&audio, "answer.wav", "audio/wav").unwrap();
        let request = Client::new()
            .post(TRANSCRIPTIONS_URL)
            .multipart(form)
            .build()
            .unwrap();
        let length: u64 = request.headers()[reqwest::header::CONTENT_LENGTH]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(length > audio.len() as u64);
    }

    #[test]
    fn test_transcription_form_rejects_bad_mime() {
        let audio = Bytes::from_static(b"x");
        assert!(transcription_form(&audio, "a.wav", "not a mime").is_err());
    }
}
