//! Prompt construction for the Gemini API.

/// Prompt template sent to the model.
///
/// The original question appears verbatim; the processed tokens give the
/// model the normalized form on a separate line.
const PROMPT_TEMPLATE: &str = "\
You are a helpful assistant. Answer concisely and accurately.
Original question: {question}
Processed tokens: {tokens}
Provide a clear answer and, when helpful, a short rationale.";

/// Renders the fixed prompt template for a question and its tokens.
///
/// The question is embedded untouched, casing and punctuation included.
/// Tokens are joined by single spaces. Total function, no side effects.
#[must_use]
pub fn build_prompt(original: &str, tokens: &[String]) -> String {
    PROMPT_TEMPLATE
        .replace("{tokens}", &tokens.join(" "))
        .replace("{question}", original)
}
