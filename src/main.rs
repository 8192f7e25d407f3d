use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info, warn};

use activity_directory::logging;
use activity_directory::web;
use activity_directory::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logger();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = match config.build_store() {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("failed to seed activities: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(activities = store.len(), "activity directory seeded");

    let app = web::router(store, &config.static_dir);

    let listener = match bind(&config.host, config.port).await {
        Ok(l) => l,
        Err(e) => {
            error!("could not bind listener: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("listening on http://{}", addr),
        Err(e) => warn!("listener has no local address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server stopped: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Binds `host:port`, retrying once on `port + 1`.
async fn bind(host: &str, port: u16) -> std::io::Result<tokio::net::TcpListener> {
    let addr = socket_addr(host, port)?;
    match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            warn!("could not bind {}: {}", addr, e);
            let fallback_port = port.checked_add(1).ok_or(e)?;
            let fallback = socket_addr(host, fallback_port)?;
            info!("trying fallback {}", fallback);
            tokio::net::TcpListener::bind(fallback).await
        }
    }
}

fn socket_addr(host: &str, port: u16) -> std::io::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}
