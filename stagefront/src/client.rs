use crate::catalog::{Artist, DatesDocument, LocationsDocument, RelationsDocument};
use crate::errors::StagefrontError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client for the remote artist catalog.
///
/// Every call is a fresh GET against one of the four fixed resource paths;
/// nothing is cached between requests. Network failures, non-2xx statuses
/// and malformed JSON all collapse into `UpstreamFailed` naming the
/// resource, which is the only distinction the handlers surface.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base: Url,
}

impl CatalogClient {
    /// `timeout` bounds the whole request/response cycle against the
    /// upstream, so a hanging catalog cannot stall a request forever.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, StagefrontError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub async fn artists(&self) -> Result<Vec<Artist>, StagefrontError> {
        self.fetch("artists", "artists").await
    }

    pub async fn locations(&self) -> Result<LocationsDocument, StagefrontError> {
        self.fetch("locations", "locations").await
    }

    pub async fn dates(&self) -> Result<DatesDocument, StagefrontError> {
        self.fetch("dates", "dates").await
    }

    pub async fn relations(&self) -> Result<RelationsDocument, StagefrontError> {
        self.fetch("relations", "relation").await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<T, StagefrontError> {
        let url = self.endpoint(path);
        tracing::debug!(resource, %url, "fetching upstream resource");

        let result = async {
            self.http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        result.map_err(|source| StagefrontError::UpstreamFailed { resource, source })
    }
}
