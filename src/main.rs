use tokio::net::TcpListener;
use trails_api::{app, AppState, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trails_api=debug,tower_http=debug")),
        )
        .init();

    let db = DbConfig::from_env()?;
    let state = AppState { db };

    let listener = TcpListener::bind("127.0.0.1:5000").await?;
    tracing::info!("trails-api listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
