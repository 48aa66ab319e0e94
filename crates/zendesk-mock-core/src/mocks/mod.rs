//! Mock state and request handling.
//!
//! This module provides functionality for serving the groups resource:
//! - [`GroupStore`](store::GroupStore): Owns the id -> group map and the id counter
//! - [`GroupsController`](controller::GroupsController): Resolves requests against the route table and applies them to the store

pub mod controller;
pub mod store;
