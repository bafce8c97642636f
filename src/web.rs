//! Web front door: a single-route question form.
//!
//! GET renders an empty form; POST runs the question through the shared
//! pipeline and re-renders the form with tokens and answer filled in.
//! Unlike the CLI, an empty POSTed question is not short-circuited: it is
//! normalized, templated, and sent to the provider like any other input.

use std::sync::Arc;

use axum::{Form, Router, extract::State, response::Html, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::answerer::AnswerProvider;
use crate::normalizer::normalize;
use crate::prompt::build_prompt;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>LLM Q&amp;A</title>
</head>
<body>
  <h1>Ask a question</h1>
  <form method="post" action="/">
    <input type="text" name="question" value="{question}" size="60">
    <button type="submit">Ask</button>
  </form>
{results}
</body>
</html>
"#;

const RESULTS_TEMPLATE: &str = r#"  <h2>Processed tokens</h2>
  <p>{processed}</p>
  <h2>Answer</h2>
  <p>{answer}</p>
"#;

/// Application state shared across handlers.
pub struct AppState {
    pub provider: AnswerProvider,
}

#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    question: String,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_question))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn show_form() -> Html<String> {
    Html(render_page("", None))
}

async fn submit_question(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuestionForm>,
) -> Html<String> {
    let question = form.question.trim().to_string();
    info!("Question received ({} bytes)", question.len());

    // The provider blocks on the network call; keep it off the async
    // worker threads.
    let page = tokio::task::spawn_blocking(move || {
        let tokens = normalize(&question);
        let processed = tokens.join(" ");
        let prompt = build_prompt(&question, &tokens);
        let answer = state.provider.answer(&prompt).into_web_text();
        render_page(&question, Some((processed, answer)))
    })
    .await
    .unwrap_or_else(|e| {
        render_page(
            "",
            Some((String::new(), format!("[Error calling Gemini API] {e}"))),
        )
    });

    Html(page)
}

/// Renders the form page, with the results block when a question was posted.
fn render_page(question: &str, results: Option<(String, String)>) -> String {
    let results_html = match results {
        Some((processed, answer)) => RESULTS_TEMPLATE
            .replace("{processed}", &escape_html(&processed))
            .replace("{answer}", &escape_html(&answer)),
        None => String::new(),
    };

    PAGE_TEMPLATE
        .replace("{question}", &escape_html(question))
        .replace("{results}", &results_html)
}

/// Escapes text for embedding in HTML element and attribute content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
