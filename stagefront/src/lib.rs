pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod pages;
pub mod service;

#[cfg(test)]
pub(crate) mod testutils;

use crate::client::CatalogClient;
use crate::config::Config;
use crate::errors::StagefrontError;
use crate::pages::Pages;
use crate::service::StagefrontService;
use std::time::Duration;

/// Builds the service from a validated config and serves it until the
/// listener fails.
pub async fn run(config: Config) -> Result<(), StagefrontError> {
    let client = CatalogClient::new(
        config.upstream.base_url.clone(),
        Duration::from_secs(config.upstream.timeout_secs),
    )?;
    let pages = Pages::from_dir(&config.pages.templates_dir)?;
    let service = StagefrontService::new(client, pages, config.pages.templates_dir.clone());

    let server =
        shared::http::HttpServer::bind(&config.listener.host, config.listener.port).await?;
    let addr = server.local_addr()?;
    tracing::info!(%addr, upstream = %config.upstream.base_url, "starting stagefront");
    server.serve(service).await
}
