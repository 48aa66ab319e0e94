//! Core library for the Zendesk groups mock resource server.
//!
//! The crate is transport-neutral: [`mocks::controller::GroupsController`]
//! takes a [`mocks::controller::Request`] and produces a
//! [`mocks::controller::Response`], backed by an in-memory
//! [`mocks::store::GroupStore`]. Hosting it over HTTP is left to
//! `zendesk-mock-server`.

pub mod config;
pub mod matching;
pub mod mocks;
pub mod types;

pub use config::{ConfigError, ServerConfig};
pub use mocks::controller::{GroupsController, Request, Response};
pub use types::group::{Group, GroupEnvelope, GroupsEnvelope};
pub use types::route::HttpMethod;
