//! Tinylink HTTP server binary.

use clap::Parser;
use tracing::info;

/// CLI arguments for the Tinylink server.
#[derive(Parser, Debug)]
#[command(name = "tinylink_server", about = "Tinylink URL shortener server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: String,

    /// Session token signing secret. Falls back to a development default
    /// that must not be used in production.
    #[arg(long, env = "SESSION_SECRET")]
    session_secret: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,tinylink_api=debug,tinylink_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    let config = tinylink_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        session_secret: args
            .session_secret
            .filter(|s| !s.is_empty())
            .unwrap_or_else(tinylink_api::services::auth::resolve_session_secret),
    };

    let state = tinylink_api::AppState::new(config.clone());
    let app = tinylink_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "tinylink listening");

    axum::serve(listener, app).await?;

    Ok(())
}
