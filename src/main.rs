use featured_recs::{
    api::{create_router, AppState},
    config::Config,
    db::load_catalog,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "featured_recs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The catalog is loaded once and never mutated afterwards
    let catalog = load_catalog(&config.catalog_path)?;
    tracing::info!(
        entries = catalog.len(),
        path = %config.catalog_path,
        "Catalog loaded"
    );

    let app = create_router(AppState::new(catalog));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
