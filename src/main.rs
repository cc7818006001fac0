use anyhow::Result;
use pereezd_site::{config::Config, routing, server};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pereezd_site=info".parse()?),
        )
        .init();

    info!("Starting localized site server");

    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    // The segment table is static configuration; refuse to start on an
    // incomplete or ambiguous table rather than serve malformed URLs.
    if let Err(errors) = routing::validate_segment_table() {
        for table_error in &errors {
            error!("Segment table: {table_error}");
        }
        anyhow::bail!(
            "segment table failed validation with {} error(s)",
            errors.len()
        );
    }
    info!(
        "Segment table validated for {} locales",
        routing::Locale::supported().len()
    );

    let app = server::build_router(config.clone());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{bind_address}");

    axum::serve(listener, app).await?;

    Ok(())
}
