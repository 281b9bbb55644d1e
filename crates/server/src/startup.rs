use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Parse the configured host/port into a socket address.
fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address `{raw}`: {e}")))
}

/// Initialize logging according to `cfg.logging.format`.
pub fn init_logging_from(cfg: &AppConfig) -> Result<(), StartupError> {
    let format: LogFormat = cfg
        .logging
        .format
        .parse()
        .map_err(|e: common::CommonError| StartupError::InvalidConfig(e.to_string()))?;
    init_logging(format);
    Ok(())
}

/// Serve a fresh in-memory user store on the configured address.
pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let app: Router = routes::build_router(ServerState::default(), build_cors());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, "starting user store server");
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
