//! Simple SDK Example
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package glossary-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package glossary-sdk --example simple
//!    ```

use glossary_sdk::{GlossaryClient, TermPayload, TermUpdatePayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Glossary SDK - Simple Example");
    println!("=============================\n");

    // 1. Connect
    let client = GlossaryClient::connect("http://127.0.0.1:50051").await?;

    // 2. List seed terms
    let list = client.get_all_terms().await?;
    println!("{} terms:", list.terms.len());
    for term in &list.terms {
        println!("  - {}: {}", term.title, term.definition);
    }

    // 3. Create (a second run hits the conflict branch)
    let created = client
        .create_term(
            "lcp",
            TermPayload {
                title: "lcp".to_string(),
                definition: "Render time of the largest visible element.".to_string(),
                source_link: Some("https://web.dev/articles/lcp".to_string()),
            },
        )
        .await;

    match created {
        Ok(term) => println!("\n✓ Created {}", term.title),
        Err(e) if e.is_already_exists() => println!("\n○ lcp already exists"),
        Err(e) => return Err(e.into()),
    }

    // 4. Update the definition only
    let updated = client
        .update_term(
            "lcp",
            TermUpdatePayload {
                definition: Some("Largest Contentful Paint.".to_string()),
                source_link: None,
            },
        )
        .await?;
    println!("✓ Updated: {} -> {}", updated.title, updated.definition);

    Ok(())
}
