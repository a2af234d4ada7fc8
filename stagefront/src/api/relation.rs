use super::utils::{ServiceBody, json_response, parse_id};
use crate::catalog::{self, RelationResponse};
use crate::errors::StagefrontError;
use crate::service::ServiceState;
use hyper::Response;

/// Serves `GET /relation/{id}`: the date-to-locations mapping for one
/// artist.
///
/// A missing id yields `{"datesLocations": {}}`, mirroring the other
/// sub-resources.
pub async fn by_id(
    state: &ServiceState,
    segment: &str,
) -> Result<Response<ServiceBody>, StagefrontError> {
    let id = parse_id(segment)?;
    let document = state.client.relations().await?;
    let by_index = catalog::index_relations(document);
    let dates_locations = by_index.get(&id).cloned().unwrap_or_default();

    json_response(&RelationResponse { dates_locations })
}
