use reqwest::StatusCode;

/// Fixed message shown to the user when a recommendation cycle fails.
pub const USER_NOTICE: &str = "Movie not found or API error.";

/// Errors raised while fetching or rendering recommendations
#[derive(thiserror::Error, Debug)]
pub enum RecsError {
    #[error("HTTP client error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Recommendation API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed recommendation response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Missing page element: #{id}")]
    MissingElement { id: String },
}

pub type AppResult<T> = Result<T, RecsError>;
