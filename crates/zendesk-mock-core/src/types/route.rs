//! Route kinds and the static groups route table.

use std::fmt;
use std::str::FromStr;

/// HTTP method for route matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a method name is not one of [`HttpMethod`]'s variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(UnsupportedMethod(s.to_owned())),
        }
    }
}

/// Operation a matched route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// Groups whose name carries the `Assign:true` marker
    ListAssignable,
    /// Single group by id
    Show,
    /// Every stored group
    List,
    /// Groups whose name carries the `USER: {id}` marker
    ListForUser,
    Create,
    Update,
    Delete,
}

/// Route definition: method plus path pattern relative to the API prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub kind: RouteKind,
    pub method: HttpMethod,
    /// URL pattern (supports {param} placeholders)
    pub path: &'static str,
}

/// Groups routes in match order. `groups/assignable` must precede
/// `groups/{id}`, otherwise `assignable` would be read as an id.
pub const GROUP_ROUTES: &[RouteDef] = &[
    RouteDef {
        kind: RouteKind::ListAssignable,
        method: HttpMethod::Get,
        path: "groups/assignable",
    },
    RouteDef {
        kind: RouteKind::Show,
        method: HttpMethod::Get,
        path: "groups/{id}",
    },
    RouteDef {
        kind: RouteKind::List,
        method: HttpMethod::Get,
        path: "groups",
    },
    RouteDef {
        kind: RouteKind::ListForUser,
        method: HttpMethod::Get,
        path: "users/{id}/groups",
    },
    RouteDef {
        kind: RouteKind::Create,
        method: HttpMethod::Post,
        path: "groups",
    },
    RouteDef {
        kind: RouteKind::Update,
        method: HttpMethod::Put,
        path: "groups/{id}",
    },
    RouteDef {
        kind: RouteKind::Delete,
        method: HttpMethod::Delete,
        path: "groups/{id}",
    },
];
