/**
 * Threadboard Server Entry Point
 *
 * Loads configuration, initializes tracing, seeds the post store and serves
 * the board over HTTP.
 */

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins; otherwise info for everything
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = threadboard::backend::server::config::load_config()?;
    let addr = config.bind_addr()?;

    // Create the Axum app
    let app = threadboard::backend::server::init::create_app(&config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
