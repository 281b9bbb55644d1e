use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Load config, falling back to defaults. The load error is returned so it
/// can be logged once the subscriber is installed.
fn load_config() -> (configs::AppConfig, Option<anyhow::Error>) {
    match configs::AppConfig::load_or_env() {
        Ok(cfg) => (cfg, None),
        Err(e) => (configs::AppConfig::default(), Some(e)),
    }
}

fn main() -> std::process::ExitCode {
    // load .env first so RUST_LOG and friends apply
    dotenv().ok();
    let (cfg, config_error) = load_config();
    if let Err(e) = server::startup::init_logging_from(&cfg) {
        common::utils::logging::init_logging_default();
        warn!(service = "server", event = "logger_fallback", error = %e, "falling back to compact logs");
    }
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    if let Some(e) = config_error {
        warn!(service = "server", event = "config_fallback", error = %e, "invalid configuration, using defaults");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        addr = %cfg.server.bind_addr(),
        "server service starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = server::run_with_config(cfg).await {
                error!(service = "server", event = "run_failed", error = %e, "server returned error");
                Err(e)
            } else {
                Ok(())
            }
        });

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                        std::process::ExitCode::SUCCESS
                    }
                    // already logged inside the task
                    Ok(Err(_)) => std::process::ExitCode::FAILURE,
                    Err(e) => {
                        error!(service = "server", event = "task_join_error", error = %e, "server task join error");
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // records live only in memory and are dropped with the process
                info!(service = "server", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
