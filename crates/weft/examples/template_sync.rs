//! End-to-end context sync against real MongoDB and OpenAI instances.
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 OPENAI_API_KEY=sk-... \
//!     cargo run --example template_sync
//! ```

use std::sync::Arc;

use weft::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mongodb_uri = std::env::var("MONGODB_URI")?;
    let api_key = std::env::var("OPENAI_API_KEY")?;

    let persist = PersistClient::connect(&mongodb_uri, "messaging").await?;
    persist.ensure_indexes().await?;

    let remote = Arc::new(AssistantClient::new(api_key)?);

    let templates = StaticTemplateSource::new().with_template(Template::new(
        "welcome_message",
        vec![
            TemplateComponent::new(ComponentType::Header, "Welcome to {{1}}!"),
            TemplateComponent::new(
                ComponentType::Body,
                "Hello {{1}}, we're glad you're here. Your account number is {{2}}.",
            ),
        ],
    ));
    let renderer = TemplateRenderer::new(Arc::new(templates));

    let service = ThreadContextService::new(
        Arc::new(persist.threads().clone()),
        Arc::new(persist.messages().clone()),
        remote,
        renderer,
    );

    // The message id must already exist in the messages collection; channel
    // ingestion records it when the template send is confirmed.
    let result = service
        .update_context_after_template(ContextSyncRequest::new(
            123,
            456,
            "welcome_message",
            vec!["John Doe", "78901"],
            "wamid.123456789012345",
        ))
        .await?;

    println!(
        "context updated: thread {} -> remote context {}",
        result.thread_id, result.remote_context_id
    );
    Ok(())
}
