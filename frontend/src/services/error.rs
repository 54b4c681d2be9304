use thiserror::Error;

/// Failures talking to the entries API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend answered with an `{ error }` body
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Message supplied by the backend, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<gloo::net::Error> for ApiError {
    fn from(error: gloo::net::Error) -> Self {
        match error {
            gloo::net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_rejections() {
        let rejected = ApiError::Rejected("Workout not found".to_string());
        assert_eq!(rejected.server_message(), Some("Workout not found"));
        assert_eq!(rejected.to_string(), "Workout not found");

        let status = ApiError::Status { status: 500, message: "boom".to_string() };
        assert_eq!(status.server_message(), None);
        assert_eq!(status.to_string(), "Server error 500: boom");
        assert!(!status.is_network());
        assert!(ApiError::Network("offline".to_string()).is_network());
    }
}
