//! Request matching utilities.

mod url;

pub use url::{UrlMatchResult, UrlPattern};
