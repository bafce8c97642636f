/// Gemini HTTP client implementation.
///
/// This module provides `GeminiClient` for making synchronous HTTP requests
/// to the Gemini `generateContent` endpoint, along with error types and a
/// builder pattern for configuration.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used when neither the builder nor `GEMINI_MODEL` specify one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// API key missing from both the builder and the environment
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// Network-related errors (connection failures, DNS resolution, etc.)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP errors with status code
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Gemini API-specific errors (malformed or empty responses)
    #[error("Gemini API error: {message}")]
    Api { message: String },
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first part.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}

/// Builder for constructing `GeminiClient` instances.
///
/// # Examples
///
/// ```no_run
/// use qask::gemini::GeminiClientBuilder;
///
/// let client = GeminiClientBuilder::new()
///     .api_key("test-key")
///     .model("gemini-2.5-flash")
///     .build()
///     .expect("Failed to create client");
/// ```
#[derive(Debug, Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    model: Option<String>,
}

impl GeminiClientBuilder {
    /// Creates a new `GeminiClientBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key explicitly instead of reading `GEMINI_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the model identifier (e.g. "gemini-2.5-flash").
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builds the `GeminiClient` with the configured settings.
    ///
    /// If `api_key()` was not called, the `GEMINI_API_KEY` environment
    /// variable is consulted; an unset or empty key yields
    /// `GeminiError::MissingApiKey`. If `model()` was not called, the
    /// `GEMINI_MODEL` environment variable is consulted, defaulting to
    /// [`DEFAULT_MODEL`].
    pub fn build(self) -> Result<GeminiClient, GeminiError> {
        let api_key = if let Some(key) = self.api_key {
            key
        } else {
            std::env::var("GEMINI_API_KEY").unwrap_or_default()
        };

        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let model = if let Some(m) = self.model {
            m
        } else {
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(GeminiError::Network)?;

        Ok(GeminiClient {
            client,
            api_key,
            model,
        })
    }
}

/// Synchronous HTTP client for the Gemini `generateContent` endpoint.
///
/// Constructed via `GeminiClientBuilder`. Each call is single-shot: no
/// retries, no streaming.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

/// Trait for Gemini API client operations.
///
/// This trait enables mocking in unit tests and keeps callers independent
/// of the concrete HTTP client.
pub trait GeminiClientTrait: Send + Sync {
    /// Generates text for the given prompt, returning the raw model output.
    fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

impl GeminiClient {
    /// Returns the model identifier configured for this client.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_internal(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/{}:generateContent", API_BASE_URL, self.model);
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(GeminiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeminiError::Http {
                status: status.as_u16(),
            });
        }

        let body: GenerateContentResponse = response.json().map_err(GeminiError::Network)?;

        body.into_text().ok_or_else(|| GeminiError::Api {
            message: "No candidate text in API response".to_string(),
        })
    }
}

impl GeminiClientTrait for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate_internal(prompt)
    }
}
