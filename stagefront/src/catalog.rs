//! Wire types for the upstream catalog and the re-indexing that turns its
//! 1-based record ids into 0-based lookup maps.
//!
//! The upstream serves every sub-resource as an `{"index": [...]}`-wrapped
//! array where each record carries a 1-based `id`, while the service looks
//! records up by the 0-based integer taken from the request path. Re-keying
//! by `id - 1` is done fresh on every request; nothing here outlives the
//! response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One band or artist as served by the upstream catalog.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i64,
    pub first_album: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub locations: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationsDocument {
    pub index: Vec<LocationRecord>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DateRecord {
    pub id: i64,
    pub dates: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatesDocument {
    pub index: Vec<DateRecord>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: i64,
    pub dates_locations: HashMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RelationsDocument {
    pub index: Vec<RelationRecord>,
}

/// Template binding for the landing page.
#[derive(Debug, Serialize)]
pub struct PageData {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationResponse {
    pub dates_locations: HashMap<String, Vec<String>>,
}

/// Re-keys location records by `id - 1`. Duplicate ids overwrite silently;
/// the last record wins.
pub fn index_locations(document: LocationsDocument) -> HashMap<i64, Vec<String>> {
    document
        .index
        .into_iter()
        .map(|record| (record.id - 1, record.locations))
        .collect()
}

/// Re-keys date records by `id - 1`.
pub fn index_dates(document: DatesDocument) -> HashMap<i64, Vec<String>> {
    document
        .index
        .into_iter()
        .map(|record| (record.id - 1, record.dates))
        .collect()
}

/// Re-keys relation records by `id - 1`.
pub fn index_relations(document: RelationsDocument) -> HashMap<i64, HashMap<String, Vec<String>>> {
    document
        .index
        .into_iter()
        .map(|record| (record.id - 1, record.dates_locations))
        .collect()
}
