use thiserror::Error;

/// Errors that can occur while importing recipes
#[derive(Error, Debug)]
pub enum ImportError {
    /// Network failure or timeout while fetching a page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// A URL could not be parsed or resolved against the site origin
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page produced a record without a title
    #[error("No recipe title found at {0}")]
    MissingTitle(String),

    /// Persistence collaborator failure
    #[error("Store error: {0}")]
    StoreError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
