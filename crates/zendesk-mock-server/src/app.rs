use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use zendesk_mock_core::{
    ConfigError, Group, GroupsController, HttpMethod, Request as MockRequest,
    Response as MockResponse, ServerConfig,
};

/// Shared state for one mock server instance. Requests are serialized
/// through the mutex.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<GroupsController>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: Arc::new(Mutex::new(GroupsController::new(config)?)),
        })
    }

    /// Snapshot of every stored group.
    pub async fn groups(&self) -> Vec<Group> {
        self.controller.lock().await.store().all()
    }

    pub async fn group_count(&self) -> usize {
        self.controller.lock().await.store().len()
    }
}

/// Every request goes through the controller's own route table, so the
/// router only needs a fallback.
pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    Router::new()
        .fallback(handle_request)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(CatchPanicLayer::custom(|err| {
            tracing::error!(event = "panic_recovered", error = ?err, "handler panicked");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }))
}

async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let Ok(method) = method.as_str().parse::<HttpMethod>() else {
        tracing::debug!(event = "method_unsupported", method = %method, uri = %uri);
        return StatusCode::NOT_FOUND.into_response();
    };

    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned());
    let mut request = MockRequest::new(method, url);
    if !body.is_empty() {
        request = request.with_body(body.to_vec());
    }

    let response = state.controller.lock().await.handle(&request);
    if !response.is_success() {
        tracing::debug!(
            event = "mock_error_status",
            method = %request.method,
            url = %request.url,
            status = response.status
        );
    }
    into_http_response(response)
}

fn into_http_response(response: MockResponse) -> Response {
    let Ok(status) = StatusCode::from_u16(response.status) else {
        tracing::error!(event = "invalid_status", status = response.status);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let Some(body) = response.body else {
        return status.into_response();
    };

    match serde_json::to_vec(&body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(bytes),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(event = "response_encode_failed", error = %err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
