use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to the backend or reading a form.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response, or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{url} answered {status}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("cannot encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// A form control holds a value that does not fit its field.
    #[error("invalid value {value:?} for field {field}")]
    InvalidForm { field: String, value: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
