//! Google Maps client error types.

/// Errors from the Google Maps HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API refused the key
    #[error(
        "API request failed with status code 403: Forbidden. \
         This could be due to an invalid API key, lack of permissions, or exceeding the quota"
    )]
    Forbidden,

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The response carried a non-OK status field
    #[error("API response status is not OK: {status}")]
    Status { status: String },

    /// The response was well-formed but semantically unusable
    #[error("API response error: {0}")]
    Response(String),

    /// The API key cannot be sent as a header value
    #[error("invalid API key format")]
    InvalidApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MapsError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = MapsError::Status {
            status: "REQUEST_DENIED".into(),
        };
        assert_eq!(
            err.to_string(),
            "API response status is not OK: REQUEST_DENIED"
        );

        let err = MapsError::Forbidden;
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("quota"));

        let err = MapsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));
    }
}
