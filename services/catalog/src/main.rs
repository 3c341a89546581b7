use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use catalog::database::run_migrations;
use catalog::repositories::ProductRepository;
use catalog::routes::create_router;
use catalog::state::AppState;
use common::database::{DatabaseConfig, health_check, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting catalog service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Make sure the products table exists
    run_migrations(&pool).await?;

    info!("Catalog service initialized successfully");

    let product_repository = ProductRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        product_repository,
    };

    // Start the web server
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    info!("Catalog service listening on 0.0.0.0:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
