use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend responded with {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ApiError {
    /// Text the backend supplied for the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_server_errors_carry_a_message() {
        let server = ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("Table unavailable".to_string()),
        };
        assert_eq!(server.server_message(), Some("Table unavailable"));

        let silent = ApiError::Server {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(silent.server_message(), None);
        assert_eq!(ApiError::Timeout.server_message(), None);
    }
}
