use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use rino_rental_backend::config::EnvironmentConfig;
use rino_rental_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Rino Rental Sorong - Backend API");
    info!("====================================");

    let config = EnvironmentConfig::from_env();
    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(config);
    let app = rino_rental_backend::app(state);

    info!("🌐 Server starting at http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET    /api/                - Health check");
    info!("   POST   /api/kendaraan       - Create vehicle");
    info!("   GET    /api/kendaraan       - List vehicles");
    info!("   GET    /api/kendaraan/:id   - Get vehicle");
    info!("   PUT    /api/kendaraan/:id   - Update vehicle");
    info!("   DELETE /api/kendaraan/:id   - Delete vehicle");
    info!("   POST   /api/booking         - Create booking");
    info!("   GET    /api/booking         - List bookings");
    info!("   POST   /api/gallery         - Upload gallery photo");
    info!("   GET    /api/gallery         - List gallery");
    info!("   GET    /api/laporan-keuangan - Financial report");
    info!("   POST   /api/admin/login     - Admin login");
    info!("   POST   /api/admin/logout    - Admin logout");
    info!("   GET    /api/statistics      - Statistics");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
