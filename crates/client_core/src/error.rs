use thiserror::Error;

/// Everything that can go wrong between issuing a game request and holding a decoded state.
#[derive(Debug, Clone, Error)]
pub enum ApiFailure {
    #[error("network failure: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiFailure {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ApiFailure::Decode(value.to_string())
        } else {
            ApiFailure::Network(value.to_string())
        }
    }
}
