//! HTTP host for the Zendesk groups mock.
//!
//! [`SampleSite`] is the entry point for tests: it serves a fresh
//! [`GroupsController`](zendesk_mock_core::GroupsController) on an ephemeral
//! port and hands out a `reqwest` client rooted at a resource path.

pub mod app;
pub mod cli;
pub mod error;
pub mod runtime;
pub mod site;

pub use error::ServerError;
pub use site::SampleSite;
