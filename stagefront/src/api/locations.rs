use super::utils::{ServiceBody, json_response, parse_id};
use crate::catalog::{self, LocationsResponse};
use crate::errors::StagefrontError;
use crate::service::ServiceState;
use hyper::Response;

/// Serves `GET /locations/{id}`: concert locations for one artist.
///
/// An id with no record yields an empty list, not an error; the upstream
/// index is treated as a lenient lookup table.
pub async fn by_id(
    state: &ServiceState,
    segment: &str,
) -> Result<Response<ServiceBody>, StagefrontError> {
    let id = parse_id(segment)?;
    let document = state.client.locations().await?;
    let by_index = catalog::index_locations(document);
    let locations = by_index.get(&id).cloned().unwrap_or_default();

    json_response(&LocationsResponse { locations })
}
