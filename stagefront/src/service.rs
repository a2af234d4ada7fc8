use crate::api;
use crate::api::utils::{ServiceBody, error_response, plain_text};
use crate::client::CatalogClient;
use crate::errors::StagefrontError;
use crate::pages::Pages;
use hyper::body::Incoming;
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

/// Read-only state shared by every request.
///
/// Nothing in here is mutated by handlers; each request re-fetches from
/// the upstream and builds its own lookup maps, so no locking is needed.
pub struct ServiceState {
    pub client: CatalogClient,
    pub pages: Pages,
    pub assets_dir: PathBuf,
}

/// The hyper service dispatching incoming requests by path prefix.
#[derive(Clone)]
pub struct StagefrontService {
    state: Arc<ServiceState>,
}

impl StagefrontService {
    pub fn new(client: CatalogClient, pages: Pages, assets_dir: PathBuf) -> Self {
        Self {
            state: Arc::new(ServiceState {
                client,
                pages,
                assets_dir,
            }),
        }
    }
}

impl Service<Request<Incoming>> for StagefrontService {
    type Response = Response<ServiceBody>;
    type Error = StagefrontError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let state = self.state.clone();
        let path = req.uri().path().to_owned();

        Box::pin(async move { Ok(route(&state, &path).await) })
    }
}

/// Dispatches one request and folds handler errors into responses, so the
/// connection never sees an error surface.
pub(crate) async fn route(state: &ServiceState, path: &str) -> Response<ServiceBody> {
    let result = if path == "/" {
        api::index::landing_page(state).await
    } else if let Some(segment) = path.strip_prefix("/locations/") {
        api::locations::by_id(state, segment).await
    } else if let Some(segment) = path.strip_prefix("/dates/") {
        api::dates::by_id(state, segment).await
    } else if let Some(segment) = path.strip_prefix("/relation/") {
        api::relation::by_id(state, segment).await
    } else if let Some(rest) = path.strip_prefix("/templates/") {
        api::assets::serve(&state.assets_dir, rest).await
    } else {
        tracing::debug!(path, "no route matched");
        return plain_text(StatusCode::NOT_FOUND, "not found");
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(path, error = %err, "request failed");
            error_response(&err)
        }
    }
}
