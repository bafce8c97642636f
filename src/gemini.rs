//! Gemini HTTP client.
//!
//! Single-shot `generateContent` calls against the Google generative
//! language API, with a trait seam for mocking in tests.

mod client;

pub use client::{
    DEFAULT_MODEL, GeminiClient, GeminiClientBuilder, GeminiClientTrait, GeminiError,
};
