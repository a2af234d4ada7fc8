use crate::errors::StagefrontError;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Body type shared by all handlers.
pub type ServiceBody = BoxBody<Bytes, StagefrontError>;

/// Wraps raw bytes into the service body type.
pub fn full(bytes: Bytes) -> ServiceBody {
    Full::new(bytes).map_err(|e| match e {}).boxed()
}

/// Parses a trailing path segment as a 0-based artist index.
pub fn parse_id(segment: &str) -> Result<i64, StagefrontError> {
    segment.parse().map_err(|_| StagefrontError::InvalidId)
}

/// Serializes a value into a 200 JSON response.
pub fn json_response<T: Serialize>(value: &T) -> Result<Response<ServiceBody>, StagefrontError> {
    let bytes = serde_json::to_vec(value).map(Bytes::from)?;
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(full(bytes))?)
}

pub fn html_response(body: String) -> Response<ServiceBody> {
    let mut response = Response::new(full(Bytes::from(body)));
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

/// Plain-text response built without a fallible builder.
pub fn plain_text(status: StatusCode, message: &str) -> Response<ServiceBody> {
    let mut response = Response::new(full(Bytes::copy_from_slice(message.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

/// Maps a handler error to its client-facing response.
///
/// Invalid ids are the caller's fault; everything else is a server-side
/// failure reported as plain text, so a failed request never leaves a
/// partial JSON body behind.
pub fn error_response(err: &StagefrontError) -> Response<ServiceBody> {
    match err {
        StagefrontError::InvalidId => plain_text(StatusCode::BAD_REQUEST, "Invalid ID"),
        StagefrontError::UpstreamFailed { .. } => {
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
        _ => plain_text(StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
    }
}
