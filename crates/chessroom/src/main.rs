use chessroom::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("chessroom=info,chessroom_session=info,chessroom_room=info,tower_http=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    let server = ChessroomServer::builder().config(config).build().await?;
    tracing::info!(addr = %server.local_addr()?, "listening");

    let sessions = server.sessions().clone();
    server.run_until(shutdown_signal()).await?;
    tracing::info!(rooms = sessions.room_count().await, "rooms open at shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
