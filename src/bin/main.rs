use std::net::SocketAddr;

use elearn_service::bootstrap::initialize_demo_course;
use elearn_service::static_service::get_database_connection;
use elearn_service::{app, config::APP_CONFIG, utils::tracing::init_standard_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!("Starting application...");

    // Initialize database connection
    let db_connection = get_database_connection().await;

    if APP_CONFIG.seed_demo_data {
        tracing::info!("Checking demo data...");
        if let Err(e) = initialize_demo_course(db_connection).await {
            tracing::error!("Failed to seed demo data: {}", e);
            tracing::warn!("Continuing without demo data...");
        }
    }

    let app = app::create_app().await?;

    let http_address = format!("0.0.0.0:{}", APP_CONFIG.port);
    tracing::info!("HTTP server listening on {}", &http_address);

    let listener = tokio::net::TcpListener::bind(http_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
