//! Controller that resolves requests against the groups route table.
//!
//! This module provides `GroupsController`, which owns the route table and the
//! group store for one server instance and turns each [`Request`] into a
//! [`Response`]. It is transport-neutral: the HTTP host only converts to and
//! from these types.

use crate::config::error::ConfigError;
use crate::config::resource::mount_path;
use crate::config::server::ServerConfig;
use crate::matching::{UrlMatchResult, UrlPattern};
use crate::mocks::store::GroupStore;
use crate::types::group::{Group, GroupEnvelope, GroupsEnvelope};
use crate::types::route::{HttpMethod, RouteDef, RouteKind, GROUP_ROUTES};
use serde::Serialize;
use serde_json::Value;

/// Name marker for groups listed by `GET groups/assignable`.
pub const ASSIGNABLE_MARKER: &str = "Assign:true";

/// Name marker that makes `POST groups` reject the group.
pub const REJECT_MARKER: &str = "error";

/// Name marker for groups listed by `GET users/{id}/groups`.
pub fn user_marker(user_id: i64) -> String {
    format!("USER: {user_id}")
}

/// Transport-neutral request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: HttpMethod,
    /// Request URL (path + optional query string)
    pub url: String,
    /// Raw request body
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Transport-neutral response. `body` is `None` for empty responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Option<Value>,
}

impl Response {
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn json<T: Serialize>(status: u16, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(err) => {
                tracing::error!(event = "response_serialize_failed", error = %err);
                Self::empty(500)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Route definition with its pattern compiled against the API prefix.
#[derive(Debug, Clone)]
struct CompiledRoute {
    def: RouteDef,
    pattern: UrlPattern,
}

/// Route matched for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub kind: RouteKind,
    pub params: UrlMatchResult,
}

/// Manager for the groups routes of one mock server instance.
///
/// `GroupsController` provides:
/// - Route lookup via `find_route()`, first match wins
/// - Request handling via `handle()`, mutating the owned [`GroupStore`]
#[derive(Debug, Clone)]
pub struct GroupsController {
    routes: Vec<CompiledRoute>,
    store: GroupStore,
    reject_status: u16,
}

impl GroupsController {
    /// Validate `config` and build the route table under `config.api_prefix`
    /// with an empty store.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let routes = GROUP_ROUTES
            .iter()
            .map(|def| -> Result<CompiledRoute, ConfigError> {
                let pattern = UrlPattern::new(&mount_path(&config.api_prefix, def.path))?;
                Ok(CompiledRoute { def: *def, pattern })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            routes,
            store: GroupStore::new(config.first_id),
            reject_status: config.reject_status,
        })
    }

    /// Controller with default settings mounted under `api_prefix`.
    pub fn with_prefix(api_prefix: &str) -> Result<Self, ConfigError> {
        Self::new(&ServerConfig {
            api_prefix: api_prefix.to_string(),
            ..ServerConfig::default()
        })
    }

    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    /// Mount paths of every route, in match order.
    pub fn route_paths(&self) -> impl Iterator<Item = (HttpMethod, &str)> {
        self.routes
            .iter()
            .map(|route| (route.def.method, route.pattern.as_str()))
    }

    /// Find the first route matching the request's method and path.
    pub fn find_route(&self, request: &Request) -> Option<RouteMatch> {
        self.routes
            .iter()
            .filter(|route| route.def.method == request.method)
            .find_map(|route| {
                let params = route.pattern.matches(&request.url);
                params.matched.then_some(RouteMatch {
                    kind: route.def.kind,
                    params,
                })
            })
    }

    /// Dispatch a request and return the response.
    ///
    /// Unmatched requests get 404. A non-numeric `{id}` or an unreadable
    /// body gets 400.
    pub fn handle(&mut self, request: &Request) -> Response {
        let Some(route) = self.find_route(request) else {
            tracing::debug!(
                event = "route_not_found",
                method = %request.method,
                url = %request.url
            );
            return Response::empty(404);
        };

        let response = self.dispatch(&route, request);
        tracing::debug!(
            event = "request_handled",
            method = %request.method,
            url = %request.url,
            route = ?route.kind,
            status = response.status
        );
        response
    }

    fn dispatch(&mut self, route: &RouteMatch, request: &Request) -> Response {
        match route.kind {
            RouteKind::ListAssignable => self.list_matching(ASSIGNABLE_MARKER),
            RouteKind::List => Response::json(
                200,
                &GroupsEnvelope {
                    groups: self.store.all(),
                },
            ),
            RouteKind::Show => match path_id(route) {
                Some(id) => self.show(id),
                None => Response::empty(400),
            },
            RouteKind::ListForUser => match path_id(route) {
                Some(user_id) => self.list_matching(&user_marker(user_id)),
                None => Response::empty(400),
            },
            RouteKind::Create => match read_group(request) {
                Some(group) => self.create(group),
                None => Response::empty(400),
            },
            RouteKind::Update => match (path_id(route), read_group(request)) {
                (Some(id), Some(group)) => self.update(id, group),
                _ => Response::empty(400),
            },
            RouteKind::Delete => match path_id(route) {
                Some(id) => self.delete(id),
                None => Response::empty(400),
            },
        }
    }

    fn list_matching(&self, marker: &str) -> Response {
        Response::json(
            200,
            &GroupsEnvelope {
                groups: self.store.filter_by_name(marker),
            },
        )
    }

    fn show(&self, id: i64) -> Response {
        match self.store.get(id) {
            Some(group) => Response::json(
                200,
                &GroupEnvelope {
                    group: group.clone(),
                },
            ),
            None => Response::empty(404),
        }
    }

    fn create(&mut self, group: Group) -> Response {
        if group.name.contains(REJECT_MARKER) {
            tracing::info!(
                event = "group_create_rejected",
                name = %group.name,
                status = self.reject_status
            );
            return Response::empty(self.reject_status);
        }

        match self.store.create(group) {
            Ok(group) => {
                tracing::info!(event = "group_created", id = ?group.id, name = %group.name);
                Response::json(201, &GroupEnvelope { group })
            }
            Err(err) => {
                tracing::error!(event = "group_create_failed", error = %err);
                Response::empty(500)
            }
        }
    }

    fn update(&mut self, id: i64, group: Group) -> Response {
        let group = self.store.upsert(id, group).clone();
        tracing::info!(event = "group_updated", id, name = %group.name);
        Response::json(200, &GroupEnvelope { group })
    }

    fn delete(&mut self, id: i64) -> Response {
        let removed = self.store.remove(id).is_some();
        tracing::info!(event = "group_deleted", id, removed);
        Response::empty(204)
    }
}

fn path_id(route: &RouteMatch) -> Option<i64> {
    route.params.params.get("id")?.parse().ok()
}

fn read_group(request: &Request) -> Option<Group> {
    let body = request.body.as_deref()?;
    match serde_json::from_slice::<GroupEnvelope>(body) {
        Ok(envelope) => Some(envelope.group),
        Err(err) => {
            tracing::debug!(event = "group_body_invalid", error = %err);
            None
        }
    }
}
