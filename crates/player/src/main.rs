//! RPGPT Player - desktop composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgpt_player::application::StoryService;
use rpgpt_player::infrastructure::ApiAdapter;
use rpgpt_player::ui::{Services, STYLES};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgpt_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // HTTP
    let api = ApiAdapter::from_env()?;
    tracing::info!(engine_url = %api.base_url(), "Starting RPGPT Player");
    let story = Arc::new(StoryService::new(Arc::new(api)));

    // Launch Dioxus
    let cfg = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("RPGPT"))
        .with_custom_head(format!("<style>{}</style>", STYLES));

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(Services::new(story))
        .launch(rpgpt_player::app);

    Ok(())
}
