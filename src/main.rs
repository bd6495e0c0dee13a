use renodesk::bootstrap::{self, Runtime};
use renodesk::config::Config;
use renodesk::infrastructure::http::router::build_router;
use renodesk::infrastructure::observability;
use renodesk::infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Tracing and metrics; flushes spans on drop
    let _observability = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    let runtime = Runtime::from_config(&config);
    let state = bootstrap::build_app_state(db, &config, runtime);
    bootstrap::spawn_cleanup_task(&state);

    let app = build_router(state);

    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
