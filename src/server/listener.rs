use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, ConnectionSettings};

/// Binds the configured address and serves connections until an accept fails.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind to {}", cfg.listen_addr))?;
    info!(
        addr = %cfg.listen_addr,
        directory = %cfg.serving_dir().display(),
        "Listening"
    );

    serve(listener, ConnectionSettings::from(cfg)).await
}

/// Accept loop over an already-bound listener. Each connection runs in its
/// own task; a failing connection only affects itself.
pub async fn serve(listener: TcpListener, settings: ConnectionSettings) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let settings = settings.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, settings);
            if let Err(e) = conn.run().await {
                tracing::error!(%peer, error = %e, "Connection aborted");
            }
        });
    }
}
