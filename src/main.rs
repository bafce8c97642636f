use anyhow::Result;
use clap::Parser;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use qask::{AnswerProvider, build_prompt, normalize};

/// qask - ask a natural-language question to the Gemini API
#[derive(Parser)]
#[command(name = "qask")]
#[command(about = "Ask a natural-language question to the Gemini API")]
#[command(version)]
struct Cli {
    /// The question, given as one or more words
    #[arg(value_name = "QUESTION")]
    question: Vec<String>,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let question = if cli.question.is_empty() {
        match Input::<String>::new()
            .with_prompt("Enter your question")
            .allow_empty(true)
            .interact_text()
        {
            Ok(input) => input,
            // Interrupted or closed terminal: leave quietly.
            Err(_) => {
                println!("Goodbye");
                return Ok(());
            }
        }
    } else {
        cli.question.join(" ")
    };

    if question.trim().is_empty() {
        println!("No question provided. Exiting.");
        return Ok(());
    }

    let tokens = normalize(&question);
    let prompt = build_prompt(&question, &tokens);

    println!("\n--- Processed Question ---");
    println!("Tokens: {}", tokens.join(" "));
    println!("\n--- Sending to LLM API ---");

    let answer = AnswerProvider::from_env().answer(&prompt).into_cli_text();

    println!("\n--- Answer ---");
    println!("{answer}");

    Ok(())
}
