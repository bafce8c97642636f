//! Remote answer provider.
//!
//! Wraps the Gemini client behind a total `answer` operation: every call
//! returns an [`AnswerOutcome`], never an error. Whether the provider is
//! configured is resolved once at construction, so callers see a plain
//! capability flag instead of per-call environment probing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::gemini::{GeminiClientBuilder, GeminiClientTrait, GeminiError};

/// Simulated-response text printed by the CLI when no API key is set.
pub const CLI_FALLBACK: &str =
    "[No API key configured] Simulated response: I received your question and would answer it here.";

/// Simulated-response text rendered by the web form when no API key is set.
pub const WEB_FALLBACK: &str = "[No API key configured] Simulated response.";

/// Prefix for answers that failed at the remote call.
pub const ERROR_PREFIX: &str = "[Error calling Gemini API] ";

/// Outcome of a single answer request.
///
/// The three cases are deliberately explicit so missing configuration,
/// remote failure, and success stay independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The model answered; text is trimmed of surrounding whitespace.
    Answered(String),
    /// No API key was available when the provider was built.
    Unconfigured,
    /// The remote call failed; carries the error description.
    Failed(String),
}

impl AnswerOutcome {
    /// Renders the outcome as the CLI prints it.
    #[must_use]
    pub fn into_cli_text(self) -> String {
        match self {
            Self::Answered(text) => text,
            Self::Unconfigured => CLI_FALLBACK.to_string(),
            Self::Failed(description) => format!("{ERROR_PREFIX}{description}"),
        }
    }

    /// Renders the outcome as the web form displays it.
    ///
    /// The simulated-response copy is shorter than the CLI's; the two
    /// surfaces have always worded their fallback differently.
    #[must_use]
    pub fn into_web_text(self) -> String {
        match self {
            Self::Answered(text) => text,
            Self::Unconfigured => WEB_FALLBACK.to_string(),
            Self::Failed(description) => format!("{ERROR_PREFIX}{description}"),
        }
    }
}

/// Sends prompts to Gemini, degrading to fixed strings when it cannot.
pub struct AnswerProvider {
    client: Option<Arc<dyn GeminiClientTrait>>,
}

impl AnswerProvider {
    /// Builds a provider from the process environment.
    ///
    /// A missing or blank `GEMINI_API_KEY` (or a client that fails to
    /// construct) yields an unconfigured provider; it still answers every
    /// prompt, with the simulated response.
    #[must_use]
    pub fn from_env() -> Self {
        match GeminiClientBuilder::new().build() {
            Ok(client) => Self {
                client: Some(Arc::new(client)),
            },
            Err(GeminiError::MissingApiKey) => {
                debug!("GEMINI_API_KEY not set; provider unconfigured");
                Self { client: None }
            }
            Err(e) => {
                warn!("Gemini client unavailable: {e}");
                Self { client: None }
            }
        }
    }

    /// Builds a provider around an existing client.
    #[must_use]
    pub fn with_client(client: Arc<dyn GeminiClientTrait>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Builds a provider that always returns the simulated response.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Returns true if a client with an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Requests an answer for the prompt.
    ///
    /// Total over all inputs and configurations: remote failures are
    /// captured in the outcome, never propagated.
    pub fn answer(&self, prompt: &str) -> AnswerOutcome {
        let Some(client) = &self.client else {
            return AnswerOutcome::Unconfigured;
        };

        match client.generate(prompt) {
            Ok(text) => AnswerOutcome::Answered(text.trim().to_string()),
            Err(e) => {
                warn!("Gemini call failed: {e}");
                AnswerOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GeminiError;

    struct MockClient {
        result: Result<String, GeminiError>,
    }

    impl GeminiClientTrait for MockClient {
        fn generate(&self, _prompt: &str) -> Result<String, GeminiError> {
            match &self.result {
                Ok(text) => Ok(text.clone()),
                Err(GeminiError::Http { status }) => Err(GeminiError::Http { status: *status }),
                Err(GeminiError::Api { message }) => Err(GeminiError::Api {
                    message: message.clone(),
                }),
                Err(_) => Err(GeminiError::Api {
                    message: "mock".to_string(),
                }),
            }
        }
    }

    #[test]
    fn unconfigured_provider_returns_unconfigured_for_any_prompt() {
        let provider = AnswerProvider::unconfigured();

        assert_eq!(provider.answer("any prompt"), AnswerOutcome::Unconfigured);
        assert_eq!(provider.answer(""), AnswerOutcome::Unconfigured);
        assert!(!provider.is_configured());
    }

    #[test]
    fn answered_text_is_trimmed() {
        let provider = AnswerProvider::with_client(Arc::new(MockClient {
            result: Ok("  4\n\n".to_string()),
        }));

        assert_eq!(
            provider.answer("What is 2+2?"),
            AnswerOutcome::Answered("4".to_string())
        );
    }

    #[test]
    fn remote_failure_becomes_failed_outcome() {
        let provider = AnswerProvider::with_client(Arc::new(MockClient {
            result: Err(GeminiError::Http { status: 500 }),
        }));

        let outcome = provider.answer("prompt");
        assert_eq!(
            outcome,
            AnswerOutcome::Failed("HTTP error: status 500".to_string())
        );
    }

    #[test]
    fn cli_rendering_of_all_outcomes() {
        assert_eq!(
            AnswerOutcome::Answered("4".to_string()).into_cli_text(),
            "4"
        );
        assert_eq!(AnswerOutcome::Unconfigured.into_cli_text(), CLI_FALLBACK);
        assert_eq!(
            AnswerOutcome::Failed("HTTP error: status 500".to_string()).into_cli_text(),
            "[Error calling Gemini API] HTTP error: status 500"
        );
    }

    #[test]
    fn web_rendering_of_all_outcomes() {
        assert_eq!(
            AnswerOutcome::Answered("4".to_string()).into_web_text(),
            "4"
        );
        assert_eq!(AnswerOutcome::Unconfigured.into_web_text(), WEB_FALLBACK);
        assert_eq!(
            AnswerOutcome::Failed("Network error: timed out".to_string()).into_web_text(),
            "[Error calling Gemini API] Network error: timed out"
        );
    }

    #[test]
    fn fallback_copy_diverges_between_surfaces() {
        // Per-surface wording, kept deliberately distinct.
        assert_ne!(CLI_FALLBACK, WEB_FALLBACK);
        assert!(CLI_FALLBACK.starts_with("[No API key configured]"));
        assert!(WEB_FALLBACK.starts_with("[No API key configured]"));
    }
}
