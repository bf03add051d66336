//! Bearer-token authorization gate.
//!
//! The API treats authorization as an opaque gate: a request either carries
//! the expected token or it doesn't. Read routes (GET/HEAD/OPTIONS) and
//! `/health` are open; every mutating route requires
//! `Authorization: Bearer {token}` and is rejected with 401 before the
//! handler runs.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

/// Auth middleware: validate the Bearer token on mutating requests.
///
/// # Performance
///
/// The `expected` parameter contains the full "Bearer <token>" string,
/// so we can do a direct string comparison without allocating.
pub(crate) async fn require_bearer_for_writes(
    expected: Arc<str>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let method = req.method();
    if method == Method::GET || method == Method::HEAD || method == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth {
        Some(h) if h == expected.as_ref() => Ok(next.run(req).await),
        _ => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "Unauthorized API request - missing or invalid token"
            );
            let mut res = Response::new(axum::body::Body::empty());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
            Ok(res)
        }
    }
}
