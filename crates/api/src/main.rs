use anyhow::Context;

use stockdesk_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    stockdesk_observability::init(config.log_format);

    tracing::info!(
        items = config.seed.len(),
        "seed loaded ({})",
        config.seed_source()
    );

    let app = stockdesk_api::app::build_app(config.seed.clone());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
