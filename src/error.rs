use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitaError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("browser launch failed: {0}")]
    Browser(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VitaError>;
