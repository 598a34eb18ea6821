//! Product API server: a separate binary that wires product-api to MySQL and serves it.
//!
//! Run from repo root: `cargo run -p product-server`
//! Settings come from the environment or a `.env` file (see `AppConfig::from_env`).

use product_api::{
    app, apply_migrations, connect_pool, ensure_database_exists, seed_demo_products, AppConfig,
    AppState, MySqlProductStore, ProductStore, RunMode,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "product_api=info,product_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database).await?;
    let pool = connect_pool(&config.database).await?;
    apply_migrations(&pool).await?;

    let store = MySqlProductStore::new(pool.clone()).with_query_logging(!config.mode.is_test());
    if config.database.seed {
        seed_demo_products(&store).await?;
    }

    // Test runs only need a prepared database; they drive the router in-process.
    if config.mode.is_test() {
        pool.close().await;
        return Ok(());
    }

    let products = store.count().await?;
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    log_banner(&config, products);

    axum::serve(listener, app(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");
    Ok(())
}

fn log_banner(config: &AppConfig, products: i64) {
    let url = format!("http://localhost:{}", config.port);
    tracing::info!(mode = config.mode.label(), %url, products, "server running");
    if config.mode == RunMode::Development {
        tracing::info!("try {}/health (server status)", url);
        tracing::info!("try {}/products (list all products)", url);
        tracing::info!("try {}/about (API info)", url);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
