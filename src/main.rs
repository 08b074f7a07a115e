use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use moat_core::config::{port_from_env_values, public_host_from_env_value};
use moat_core::seed::demo_records;
use moat_core::{CoreConfig, RecordStore};

/// Main entry point for the MOAT mock ORCID service
///
/// Seeds the in-memory store with the demo population and serves the REST API until
/// interrupted.
///
/// # Environment Variables
/// - `MOAT_PORT`, then `PORT`: listening port (default: ":8080")
/// - `MOAT_PUBLIC_HOST`: host used in `Location` headers (default: "api.orcid.org")
/// - `RUST_LOG`: log filter
///
/// # Errors
/// Returns an error if:
/// - the configuration is invalid,
/// - the store cannot be seeded,
/// - the address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("moat_run=info".parse()?)
                .add_directive("api_rest=debug".parse()?)
                .add_directive("moat_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = port_from_env_values(
        std::env::var("MOAT_PORT").ok(),
        std::env::var("PORT").ok(),
    );
    let public_host = public_host_from_env_value(std::env::var("MOAT_PUBLIC_HOST").ok());
    let cfg = Arc::new(CoreConfig::new(&port, public_host)?);

    let store = RecordStore::new();
    store.seed(demo_records())?;
    tracing::info!(records = store.len()?, "seeded demo records");

    let app = router(AppState::new(store, cfg.clone()));

    for line in cfg.banner() {
        tracing::info!("{line}");
    }

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    tracing::info!("-- MOAT stopped");
    Ok(())
}
