use std::sync::Arc;

use wellness_booking::api::{ApiState, MemoryStore, api_routes};
use wellness_booking::config::AppConfig;
use wellness_booking::profile::ConsultantProfile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🌿 Wellness Booking v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Bookings API:   http://0.0.0.0:{}/api/bookings", config.port);
    eprintln!("   Consultant API: http://0.0.0.0:{}/api/consultant", config.port);
    eprintln!("   Consultant:     {}\n", config.consultant_email);

    let store = Arc::new(MemoryStore::new(ConsultantProfile::new(
        config.consultant_email.clone(),
        config.consultant_phone.clone(),
    )));

    let app = api_routes(ApiState { store });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Booking API server started");
    axum::serve(listener, app).await?;

    Ok(())
}
