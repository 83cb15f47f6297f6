//! Web server entry point.
//!
//! Reads configuration from the environment, initialises logging, checks the
//! store and stylesheet and serves the catalogue until the process is stopped.

use log::{error, info};
use principles_core::{init_logging, LogSink};
use principles_web::{build_router, AppState, WebConfig};

#[tokio::main]
async fn main() {
    let config = WebConfig::from_env();

    let sink = config.catalog.log_sink().unwrap_or(LogSink::Stderr);
    if let Err(err) = init_logging(&config.catalog.log_level, sink) {
        eprintln!("logging disabled: {err}");
    }

    let state = match AppState::load(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("event=web_start module=web status=error error_code=startup_check_failed error={err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&config.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "event=web_start module=web status=error error_code=bind_failed bind={} error={}",
                config.bind, err
            );
            eprintln!("Failed to bind to {}: {err}", config.bind);
            std::process::exit(1);
        }
    };

    info!(
        "event=web_start module=web status=ok bind={} db_path={}",
        config.bind,
        state.db_path.display()
    );
    eprintln!("Server running at http://{}/", config.bind);

    if let Err(err) = axum::serve(listener, build_router(state)).await {
        error!("event=web_serve module=web status=error error={err}");
        eprintln!("Server error: {err}");
        std::process::exit(1);
    }
}
