use bakery_api::api::{self, AppState};
use bakery_api::config::AppConfig;
use bakery_api::storage;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Bakery API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Database: {}", config.database.url);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Open database and bring the schema up to date
    info!("💾 Connecting to database...");
    let db = storage::connect(&config.database.url).await?;
    storage::migrate(&db).await?;

    if config.database.seed {
        info!("🌱 Seeding database...");
        storage::seed::seed(&db).await?;
    }
    info!("✅ Database ready");

    let state = AppState { db: db.clone() };
    let app = api::router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /                           - Banner");
    info!("   GET    /health                     - Health check");
    info!("   GET    /bakeries                   - List bakeries");
    info!("   GET    /bakeries/{{id}}              - Get bakery");
    info!("   PATCH  /bakeries/{{id}}              - Update bakery");
    info!("   GET    /baked_goods/by_price       - Baked goods by price");
    info!("   GET    /baked_goods/most_expensive - Most expensive baked good");
    info!("   POST   /baked_goods                - Create baked good");
    info!("   DELETE /baked_goods/{{id}}           - Delete baked good");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("💾 Closing database connections...");
    db.close().await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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

    info!("🛑 Shutdown signal received");
}
