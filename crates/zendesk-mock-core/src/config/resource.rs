//! Path prefix normalization.

/// Normalize a resource root for use as a client base path.
///
/// Leading and trailing slashes are trimmed; a non-empty result gets one
/// trailing slash so relative paths can be appended directly.
pub fn resource_root(resource: Option<&str>) -> String {
    let trimmed = trim_slashes(resource.unwrap_or(""));
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Join a mount prefix and a route path into an absolute path.
pub fn mount_path(prefix: &str, path: &str) -> String {
    let prefix = trim_slashes(prefix);
    let path = trim_slashes(path);
    match (prefix.is_empty(), path.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{path}"),
        (false, true) => format!("/{prefix}"),
        (false, false) => format!("/{prefix}/{path}"),
    }
}

fn trim_slashes(value: &str) -> &str {
    value.trim_matches('/')
}
