use clap::Parser;
use std::path::PathBuf;
use zendesk_mock_core::ServerConfig;

use crate::error::ServerError;

#[derive(Debug, Parser)]
#[command(name = "groups-mock")]
#[command(about = "In-memory mock of the Zendesk groups API")]
pub struct Cli {
    /// Config file (.yaml, .yml, .json or .jsonc)
    #[arg(long, short, env = "GROUPS_MOCK_CONFIG")]
    pub config: Option<PathBuf>,
    /// Interface to bind, overrides the config file
    #[arg(long, env = "GROUPS_MOCK_HOST")]
    pub host: Option<String>,
    /// Port to bind, overrides the config file
    #[arg(long, short, env = "GROUPS_MOCK_PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// Config file (or defaults) with command line overrides applied.
    pub fn resolve_config(&self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.validate()?;
        Ok(config)
    }
}
