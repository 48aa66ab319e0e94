//! Core domain types for groups and routes.

pub mod group;
pub mod route;
