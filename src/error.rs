use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("failed to encode projection: {0}")]
    Encode(#[from] serde_json::Error),
}
