use thiserror::Error;

/// Failure of a single ticker fetch. Both variants map to the same reply text.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection error, timeout or non-2xx status from the ticker API.
    #[error("ticker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not JSON or did not carry `btc_usd.sell`.
    #[error("malformed ticker response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}
