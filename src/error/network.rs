// src/error/network.rs
//
// Transport-level failures reported by a remote movie source.
// The repository never lets these reach its callers.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("You need to be authenticated first.")]
    AuthenticationError,

    #[error("Bad request.")]
    BadRequest,

    #[error("The requested URL is outdated.")]
    Outdated,

    #[error("Network request failed.")]
    ConnectionFailed,

    #[error("Response returned with no data to decode.")]
    NoData,

    #[error("Unable to decode the response.")]
    UnableToDecode,

    #[error("Server error.")]
    ServerError,

    #[error("The request timed out.")]
    Timeout,

    #[error("Invalid response received from the server.")]
    InvalidResponse,
}

impl NetworkError {
    /// Map an HTTP status code of a finished request.
    ///
    /// Returns `None` for 2xx, which the caller decodes.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(NetworkError::AuthenticationError),
            400..=499 => Some(NetworkError::BadRequest),
            500..=599 => Some(NetworkError::ServerError),
            600 => Some(NetworkError::Outdated),
            _ => Some(NetworkError::InvalidResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(NetworkError::from_status(200), None);
        assert_eq!(NetworkError::from_status(204), None);
        assert_eq!(
            NetworkError::from_status(401),
            Some(NetworkError::AuthenticationError)
        );
        assert_eq!(NetworkError::from_status(404), Some(NetworkError::BadRequest));
        assert_eq!(NetworkError::from_status(503), Some(NetworkError::ServerError));
        assert_eq!(NetworkError::from_status(600), Some(NetworkError::Outdated));
        assert_eq!(
            NetworkError::from_status(302),
            Some(NetworkError::InvalidResponse)
        );
    }
}
