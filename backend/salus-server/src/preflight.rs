//! CORS preflight status rewrite.
//!
//! The CORS layer answers every OPTIONS request itself with `200 OK`. This
//! middleware wraps it and turns successful OPTIONS responses into
//! `204 No Content` with an empty body. The request body is never read.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::Response,
};

pub async fn no_content_preflight(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;

    if !is_options || !response.status().is_success() {
        return response;
    }

    let (mut parts, _body) = response.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);

    Response::from_parts(parts, Body::empty())
}
