//! Shared helpers for tests: a throwaway mock upstream and canned fixture
//! documents shaped like the real catalog responses.

use crate::client::CatalogClient;
use crate::pages::Pages;
use crate::service::ServiceState;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

pub const ARTISTS_JSON: &str = r#"[
    {
        "id": 1,
        "image": "https://example.com/queen.jpg",
        "name": "Queen",
        "members": ["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
        "creationDate": 1970,
        "firstAlbum": "14-12-1973"
    },
    {
        "id": 2,
        "image": "https://example.com/soad.jpg",
        "name": "System of a Down",
        "members": ["Serj Tankian", "Daron Malakian"],
        "creationDate": 1987,
        "firstAlbum": "30-06-1998"
    }
]"#;

pub const LOCATIONS_JSON: &str = r#"{"index":[{"id":1,"locations":["london"]}]}"#;

pub const DATES_JSON: &str = r#"{"index":[{"id":1,"dates":["2023-01-01","2023-02-02"]}]}"#;

pub const RELATIONS_JSON: &str =
    r#"{"index":[{"id":2,"datesLocations":{"2023-01-01":["paris"]}}]}"#;

/// Spawns a local server that answers the given paths with canned JSON
/// bodies and 404s everything else. Returns its base URL.
pub async fn mock_upstream(routes: &[(&str, &str)]) -> String {
    let routes: Arc<HashMap<String, String>> = Arc::new(
        routes
            .iter()
            .map(|(path, body)| (path.to_string(), body.to_string()))
            .collect(),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let io = TokioIo::new(stream);
            let routes = routes.clone();

            tokio::spawn(async move {
                let svc = service_fn(move |req: Request<hyper::body::Incoming>| {
                    let routes = routes.clone();
                    async move {
                        let response = match routes.get(req.uri().path()) {
                            Some(body) => Response::builder()
                                .header("content-type", "application/json")
                                .body(Full::new(Bytes::from(body.clone())))
                                .unwrap(),
                            None => Response::builder()
                                .status(StatusCode::NOT_FOUND)
                                .body(Full::new(Bytes::new()))
                                .unwrap(),
                        };
                        Ok::<_, std::convert::Infallible>(response)
                    }
                });

                let _ = hyper_util::server::conn::auto::Builder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await;
            });
        }
    });

    format!("http://127.0.0.1:{port}")
}

/// Base URL of a port that refuses connections: bound, then released.
pub fn refused_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

const TEST_TEMPLATE: &str = "<!DOCTYPE html>\n<html><body>\
{{#each artists}}<h2>{{name}}</h2><p>{{creationDate}}</p>{{/each}}\
</body></html>\n";

/// Builds full handler state against the given upstream base URL, with a
/// minimal landing-page template in a temp directory. The `TempDir` must be
/// kept alive for as long as the state is used.
pub fn test_state(base_url: &str) -> (tempfile::TempDir, ServiceState) {
    let dir = tempfile::tempdir().expect("create temp templates dir");
    std::fs::write(dir.path().join("index.hbs"), TEST_TEMPLATE).expect("write template");

    let client = CatalogClient::new(Url::parse(base_url).unwrap(), Duration::from_secs(2))
        .expect("build client");
    let pages = Pages::from_dir(dir.path()).expect("load pages");
    let assets_dir = dir.path().to_path_buf();

    (
        dir,
        ServiceState {
            client,
            pages,
            assets_dir,
        },
    )
}
