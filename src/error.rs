/// Errors that might occur when using the library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A route template placeholder had no corresponding argument. Raised
    /// before any request is sent for that page.
    #[error("missing route argument `{0}`")]
    MissingRouteArgument(&'static str),

    /// A session cookie was not found in the environment.
    #[error("credential `{0}` is not set in the environment")]
    MissingCredential(&'static str),

    /// An HTTP client error (including status codes indicating failure).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body that could not be decoded as JSON.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
