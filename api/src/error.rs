use thiserror::Error;

/// Everything that can go wrong while loading the event list. The dashboard
/// treats every variant the same way: one blocking notice, no retry.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("events endpoint responded with HTTP {status}")]
    Status { status: u16 },

    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed events body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid events endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
