//! Errors raised while starting, driving or stopping the mock server.

use std::net::SocketAddr;
use zendesk_mock_core::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid bind address `{0}`")]
    InvalidAddress(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("server task: {0}")]
    Join(#[from] tokio::task::JoinError),
}
