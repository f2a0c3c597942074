use anyhow::Context;
use songbridge_api::{
    api_router,
    config::{Config, DEFAULT_LOG_FILTER},
    middleware::build_cors_layer,
    AssistantService, AssistantState, SearchState,
};
use songbridge_catalog_client::CatalogClient;
use songbridge_textgen_client::TextGenClient;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(config.log_filter())
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = %config.common.environment,
        "Starting songbridge API on port {}",
        config.port
    );

    if config.common.environment.is_production() && config.cors_allowed_origins.is_none() {
        tracing::warn!("CORS_ORIGINS not set in production, any origin will be allowed");
    }

    let catalog =
        CatalogClient::new(config.catalog()).context("Failed to build catalog client")?;
    tracing::info!(url = %config.catalog().url, "Catalog client initialized");

    let textgen =
        TextGenClient::new(config.textgen()).context("Failed to build text-generation client")?;
    tracing::info!(url = %config.textgen().url, "Text-generation client initialized");

    let app = api_router(
        SearchState::new(catalog),
        AssistantState::new(AssistantService::new(textgen)),
    )
    .layer(TraceLayer::new_for_http())
    .layer(build_cors_layer(config.cors_allowed_origins.as_deref()));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
