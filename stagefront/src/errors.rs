use thiserror::Error;

/// Result type alias for stagefront operations
pub type Result<T, E = StagefrontError> = std::result::Result<T, E>;

/// Errors that can occur while serving catalog requests
#[derive(Error, Debug)]
pub enum StagefrontError {
    /// The trailing path segment was not an integer.
    #[error("Invalid ID")]
    InvalidId,

    /// The upstream catalog could not be fetched or decoded. The two cases
    /// are deliberately not distinguished to the client.
    #[error("Failed to load {resource}")]
    UpstreamFailed {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to build response: {0}")]
    ResponseBuild(#[from] hyper::http::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
