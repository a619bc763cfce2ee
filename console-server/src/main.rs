use console_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config);

    tracing::info!("Console server starting...");

    // 2. Initialize server state
    let state = ServerState::initialize(&config).await;

    // 3. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
