pub mod answerer;
pub mod gemini;
pub mod normalizer;
pub mod prompt;
pub mod web;

pub use answerer::{AnswerOutcome, AnswerProvider};
pub use gemini::{GeminiClient, GeminiClientBuilder, GeminiClientTrait, GeminiError};
pub use normalizer::normalize;
pub use prompt::build_prompt;
