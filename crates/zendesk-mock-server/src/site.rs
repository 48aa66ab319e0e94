//! Scoped mock server fixture for client tests.
//!
//! A [`SampleSite`] owns a listener on an ephemeral port, the task serving it
//! and an HTTP client whose base URL is rooted at a resource path. Each test
//! builds its own site, so state never leaks between test cases.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use zendesk_mock_core::config::resource::resource_root;
use zendesk_mock_core::{Group, ServerConfig};

use crate::app::AppState;
use crate::error::ServerError;
use crate::runtime;

/// How long `shutdown` waits for in-flight connections before aborting.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SampleSite {
    addr: SocketAddr,
    state: AppState,
    client: reqwest::Client,
    base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<(), ServerError>>>,
}

impl SampleSite {
    /// Start a site with the default config, client rooted at `resource`.
    pub async fn new(resource: Option<&str>) -> Result<Self, ServerError> {
        Self::with_config(ServerConfig::default(), resource).await
    }

    pub async fn with_config(
        config: ServerConfig,
        resource: Option<&str>,
    ) -> Result<Self, ServerError> {
        let state = AppState::new(&config)?;
        let listener = runtime::bind(&config).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(runtime::serve(listener, state.clone(), async move {
            let _ = shutdown_rx.await;
        }));

        let client = build_client()?;
        let base_url = base_url(addr, resource);
        tracing::debug!(event = "sample_site_started", %addr, base_url = %base_url);

        Ok(Self {
            addr,
            state,
            client,
            base_url,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        })
    }

    /// Replace the client and re-root it at `resource`. Server state is kept.
    pub fn refresh_client(&mut self, resource: Option<&str>) -> Result<(), ServerError> {
        self.client = build_client()?;
        self.base_url = base_url(self.addr, resource);
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// `http://{addr}/{resource_root}`, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Snapshot of every stored group.
    pub async fn groups(&self) -> Vec<Group> {
        self.state.groups().await
    }

    pub async fn group_count(&self) -> usize {
        self.state.group_count().await
    }

    /// Stop accepting connections and wait for the server task to finish.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let Some(mut task) = self.task.take() else {
            return Ok(());
        };

        match tokio::time::timeout(SHUTDOWN_TIMEOUT, &mut task).await {
            Ok(joined) => joined?,
            Err(_) => {
                tracing::warn!(event = "sample_site_shutdown_timeout", addr = %self.addr);
                task.abort();
                Ok(())
            }
        }
    }
}

impl Drop for SampleSite {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn build_client() -> Result<reqwest::Client, ServerError> {
    Ok(reqwest::Client::builder().build()?)
}

fn base_url(addr: SocketAddr, resource: Option<&str>) -> String {
    format!("http://{addr}/{}", resource_root(resource))
}
