use super::utils::{ServiceBody, json_response, parse_id};
use crate::catalog::{self, DatesResponse};
use crate::errors::StagefrontError;
use crate::service::ServiceState;
use hyper::Response;

/// Serves `GET /dates/{id}`: concert dates for one artist.
pub async fn by_id(
    state: &ServiceState,
    segment: &str,
) -> Result<Response<ServiceBody>, StagefrontError> {
    let id = parse_id(segment)?;
    let document = state.client.dates().await?;
    let by_index = catalog::index_dates(document);
    let dates = by_index.get(&id).cloned().unwrap_or_default();

    json_response(&DatesResponse { dates })
}
