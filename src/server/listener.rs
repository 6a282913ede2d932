use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::context::ServerContext;

/// A bound, listening server.
pub struct Server {
    listener: TcpListener,
    ctx: Arc<ServerContext>,
}

impl Server {
    /// Creates the socket with `SO_REUSEADDR`, binds `0.0.0.0:<port>` and
    /// starts listening with the configured backlog.
    pub fn bind(cfg: Config) -> anyhow::Result<Self> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.port));

        let socket = TcpSocket::new_v4().context("Failed to create socket")?;
        socket
            .set_reuseaddr(true)
            .context("Failed to set socket options")?;
        socket
            .bind(addr)
            .with_context(|| format!("Failed to bind to port {}. Port may be in use", cfg.port))?;
        let listener = socket
            .listen(cfg.backlog)
            .context("Failed to listen on socket")?;

        Ok(Self {
            listener,
            ctx: Arc::new(ServerContext::new(cfg)),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Each connection runs on its own task while holding a
    /// permit from the connection limiter. Only returns on limiter closure.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let permit = self
                .ctx
                .limiter
                .clone()
                .acquire_owned()
                .await
                .context("connection limiter closed")?;

            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!("Failed to accept connection: {}", e);
                    continue;
                }
            };
            tracing::debug!("Accepted connection from {}", peer);

            let ctx = self.ctx.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, ctx);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
                drop(permit);
            });
        }
    }
}

/// Binds according to `cfg` and serves until the process is stopped.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let server = Server::bind(cfg)?;
    info!("Server listening on http://localhost:{}", server.local_addr()?.port());
    server.run().await
}
