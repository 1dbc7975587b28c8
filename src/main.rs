use tokio::net::TcpListener;
use text_summarizer::{
    config::Config,
    api::routes::create_router,
    setup_logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    tracing::info!(%server_addr, "Starting server");

    let app = create_router();

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
