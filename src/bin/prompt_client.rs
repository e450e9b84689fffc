//! One-shot prompt demo.
//!
//! Sends a single hardcoded prompt to the generation API and prints the
//! completion to stdout. Handy as a credential sanity check.

use sandbox_hint_server::domain::ai::{OpenAiGenerator, TextGenerator};

const DEMO_PROMPT: &str = "What are three things that people find cool about science.";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let client = OpenAiGenerator::new("gpt-5-nano");

    match client.generate(DEMO_PROMPT).await {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("prompt-client: {err}");
            std::process::exit(1);
        }
    }
}
