use super::utils::{ServiceBody, full, plain_text};
use crate::errors::StagefrontError;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{Response, StatusCode};
use std::path::Path;

/// Serves `GET /templates/{file}`: static assets read verbatim from the
/// templates directory. Anything that would escape the directory and
/// anything unreadable is a 404.
pub async fn serve(
    assets_dir: &Path,
    rest: &str,
) -> Result<Response<ServiceBody>, StagefrontError> {
    if rest.is_empty() || rest.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Ok(plain_text(StatusCode::NOT_FOUND, "not found"));
    }

    let path = assets_dir.join(rest);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mut response = Response::new(full(bytes.into()));
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type(&path)));
            Ok(response)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "asset not readable");
            Ok(plain_text(StatusCode::NOT_FOUND, "not found"))
        }
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
