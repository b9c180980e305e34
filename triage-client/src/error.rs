use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please select an image first")]
    NoImage,

    #[error("Please enter your address")]
    MissingAddress,

    #[error("Please describe your symptoms")]
    MissingSymptoms,

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status and an `{error}` body.
    #[error("Relay returned {status}: {message}")]
    Relay { status: u16, message: String },
}
