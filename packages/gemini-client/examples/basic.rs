//! Basic Gemini client usage example

use gemini_client::{Content, GeminiClient, GenerationConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?;

    let model = client
        .model("gemini-1.5-flash")
        .generation_config(
            GenerationConfig::new()
                .temperature(1.0)
                .top_p(0.95)
                .top_k(64)
                .max_output_tokens(256)
                .response_mime_type("text/plain"),
        )
        .build();

    println!("=== One-turn chat ===");
    let mut chat = model.start_chat(vec![Content::user(
        "Rust is a systems programming language focused on safety and speed.",
    )]);
    let reply = chat.send_message("Describe Rust in one sentence.").await?;

    if reply.is_content_policy_rejection() {
        println!("Rejected: {:?}", reply.rejection_reason());
    } else {
        println!("Response: {}", reply.text);
    }

    Ok(())
}
