//! RPGPT Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgpt_engine::app::{App, StorySettings};
use rpgpt_engine::config::EngineConfig;
use rpgpt_engine::infrastructure::openai::OpenAiClient;
use rpgpt_engine::infrastructure::ports::LlmPort;
use rpgpt_engine::infrastructure::resilient_llm::ResilientLlmClient;
use rpgpt_engine::prompt_templates::StoryPrompt;
use rpgpt_engine::stores::GameStateStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgpt_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RPGPT Engine");

    let config = EngineConfig::from_env()?;
    if config.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; requests go out without credentials");
    }

    // Create infrastructure clients
    let openai = Arc::new(OpenAiClient::from_config(&config.llm));
    let retry_config = config.llm.retry_config();
    tracing::info!(
        base_url = %config.llm.base_url,
        model = %config.llm.model,
        timeout_secs = config.llm.timeout_secs,
        max_retries = retry_config.max_retries,
        "Completion client configured"
    );
    let llm: Arc<dyn LlmPort> = if retry_config.max_retries > 0 {
        Arc::new(ResilientLlmClient::new(openai, retry_config))
    } else {
        openai
    };

    // Create application
    let settings = StorySettings::from_config(&config.llm, StoryPrompt::from_env());
    let app = Arc::new(App::new(llm, Arc::new(GameStateStore::seeded()), settings));

    let router = rpgpt_engine::api::router(app, config.server.cors_allowed_origins.as_deref());

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
