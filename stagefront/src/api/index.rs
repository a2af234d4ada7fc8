use super::utils::{ServiceBody, html_response};
use crate::errors::StagefrontError;
use crate::service::ServiceState;
use hyper::Response;

/// Serves `GET /`: the landing page, rendered from a fresh artist fetch.
pub async fn landing_page(state: &ServiceState) -> Result<Response<ServiceBody>, StagefrontError> {
    let artists = state.client.artists().await?;
    tracing::debug!(count = artists.len(), "rendering landing page");
    let body = state.pages.render_index(artists)?;
    Ok(html_response(body))
}
