//! URL pattern matching with path parameters.

use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlMatchResult {
    pub matched: bool,
    pub params: HashMap<String, String>,
}

/// Path pattern with `{param}` placeholders, compiled once.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    pattern: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl UrlPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = normalize_url(pattern);
        let (regex_str, param_names) = pattern_to_regex(&pattern);
        let regex = Regex::new(&regex_str)?;
        Ok(Self {
            pattern,
            regex,
            param_names,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match `url` (path, optionally followed by a query string).
    pub fn matches(&self, url: &str) -> UrlMatchResult {
        let url = normalize_url(url);

        let Some(caps) = self.regex.captures(&url) else {
            return UrlMatchResult::default();
        };

        let params = self
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name.clone(), m.as_str().to_owned())))
            .collect();

        UrlMatchResult {
            matched: true,
            params,
        }
    }
}

fn normalize_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else if trimmed.starts_with('/') {
        trimmed.into()
    } else {
        format!("/{trimmed}")
    }
}

fn pattern_to_regex(pattern: &str) -> (String, Vec<String>) {
    let mut param_names = Vec::new();
    let mut regex_str = String::from("^");
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '{' {
            let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
            param_names.push(name);
            regex_str.push_str("([^/]+)");
        } else {
            regex_str.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }

    regex_str.push_str("/?$");
    (regex_str, param_names)
}
