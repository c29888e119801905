use std::net::{IpAddr, SocketAddr};
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use stockroom::core::{AppState, Config, TokenKeys};
use stockroom::create_router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // A missing or invalid configuration (above all the signing secret) is
    // fatal: bail out before binding anything.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error: {err}");
            process::exit(1);
        }
    };
    config.print_info();

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    let token_keys = TokenKeys::new(
        &config.jwt_secret,
        config.jwt_algorithm,
        chrono::Duration::minutes(config.access_token_expire_minutes),
    );
    let state = Arc::new(AppState::new(pool, token_keys));

    let cors = match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    let app = create_router(state).layer(cors);

    let addr = SocketAddr::from((config.server_host.parse::<IpAddr>()?, config.server_port));
    info!("Server listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
