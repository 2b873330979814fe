use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    BadStatus(u16),

    #[error("failed to decode response: {detail}")]
    Decode { detail: String },

    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ApiError {
    /// Message suitable for direct display to an end user. Front ends rely on
    /// this to tell "could not reach server", "server rejected request" and
    /// "server sent unexpected data" apart.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Could not reach the inventory server. Check that it is running and the base URL is correct."
                    .to_string()
            }
            ApiError::BadStatus(code) => {
                format!("The server rejected the request (HTTP {code}).")
            }
            ApiError::Decode { .. } => "The server sent unexpected data.".to_string(),
            ApiError::Serialization(_) => "Failed to prepare the request payload.".to_string(),
            ApiError::InvalidUrl(_) => {
                "The request URL could not be built from the base URL.".to_string()
            }
            ApiError::Io(_) => "Could not read the attached file.".to_string(),
            ApiError::Config { message } => format!("Invalid configuration: {message}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
