//! `/api/*` forwarding to the backend API.
//!
//! DESIGN
//! ======
//! Requests are buffered and replayed against `API_UPSTREAM_URL` with the
//! same method, path, query, and end-to-end headers (cookies included, so
//! the backend session works unchanged). Redirects are returned to the
//! browser rather than followed.
//!
//! ERROR HANDLING
//! ==============
//! Failures map to JSON `{"error": ...}` bodies: 503 when no upstream is
//! configured, 413 for oversized bodies, 400 for unreadable ones, and
//! 502/504 when the upstream cannot be reached.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

/// Applied to the router with `DefaultBodyLimit`.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API upstream is not configured")]
    NotConfigured,
    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    BodyTooLarge,
    #[error("unreadable request body: {0}")]
    Body(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::BodyTooLarge
        } else {
            Self::Body(rejection.body_text())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "api forward failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Headers that describe a single connection and must not be forwarded,
/// plus the ones the outgoing client recomputes.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{base}{path_and_query}")
}

/// `ANY /api/*`: replay the request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    request_headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let base = state.config.api_upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let body = body?;

    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(base, path_and_query);

    let mut headers = forwardable_headers(&request_headers);
    if let Some(host) = request_headers.get(header::HOST) {
        headers.insert(HeaderName::from_static("x-forwarded-host"), host.clone());
    }

    tracing::debug!(%method, %url, "forwarding api request");
    let upstream = state
        .http
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    Ok((status, headers, bytes).into_response())
}
