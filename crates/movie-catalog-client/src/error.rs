use thiserror::Error;

/// Failure of a single catalog call
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success status
    #[error("API Error: {status} - {reason}")]
    Remote { status: u16, reason: String },

    /// The payload could not be parsed as the expected shape
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CatalogError {
    pub fn remote(status: reqwest::StatusCode) -> Self {
        CatalogError::Remote {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// HTTP status of a remote failure
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = CatalogError::remote(reqwest::StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "API Error: 401 - Unauthorized");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_decode_error_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CatalogError::from(json_err);
        assert!(err.to_string().starts_with("Failed to decode catalog response:"));
        assert_eq!(err.status(), None);
    }
}
