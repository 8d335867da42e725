use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by the camera-stream client. Transport errors and
/// non-2xx responses propagate unchanged from reqwest; the 204 case on the
/// printer lookup is not an error.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}
