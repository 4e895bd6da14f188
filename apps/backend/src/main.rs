use tienlen::config::ServerConfig;
use tienlen::{server, telemetry};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Settings come from TIENLEN_HOST, TIENLEN_PORT, TIENLEN_SEATS and TIENLEN_SEED.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("❌ Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!(%addr, seats = config.seats, "🚀 Tien Len table server listening");

    tokio::select! {
        result = server::serve(listener, config) => {
            if let Err(e) = result {
                error!(error = %e, "server stopped");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }
}
