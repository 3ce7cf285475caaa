//! Planner error types.
//!
//! Every collaborator error is folded into [`PlanError`] so the composer can
//! propagate failures with `?` and callers see one error type per plan.

use crate::geocode::GeocodeError;
use crate::maps::MapsError;

/// Why a collaborator request failed at the transport level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// HTTP 403: invalid key, API not enabled for the key, or quota exhausted
    #[error("forbidden (invalid API key, lack of permissions, or exceeded quota)")]
    Forbidden,

    /// Any other non-success HTTP status
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request did not complete within the client timeout
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or other transport failure
    #[error("{0}")]
    Transport(String),
}

impl RequestFailure {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return RequestFailure::Timeout;
        }
        match err.status() {
            Some(status) if status == reqwest::StatusCode::FORBIDDEN => RequestFailure::Forbidden,
            Some(status) => RequestFailure::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => RequestFailure::Transport(err.to_string()),
        }
    }
}

/// Error from journey planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// The request itself is unusable
    #[error("invalid journey request: {0}")]
    InvalidRequest(String),

    /// A location string could not be geocoded
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// The direct trip alone exceeds the requested duration
    #[error(
        "ending location not reachable within the specified duration \
         (direct trip takes {direct_secs}s, budget is {budget_secs}s)"
    )]
    UnreachableWithinDuration { direct_secs: u32, budget_secs: u32 },

    /// No intermediate stop could be fitted into the budget
    #[error("no nearby places found within the specified duration")]
    NoNearbyPlacesFound,

    /// A collaborator call failed at the transport level
    #[error("API request failed: {0}")]
    ApiRequestFailed(RequestFailure),

    /// A collaborator answered, but with an unusable payload
    #[error("API response error: {0}")]
    ApiResponseError(String),
}

impl PlanError {
    /// Whether the failure was a 403 from a collaborator.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, PlanError::ApiRequestFailed(RequestFailure::Forbidden))
    }
}

impl From<MapsError> for PlanError {
    fn from(err: MapsError) -> Self {
        match err {
            MapsError::Http(e) => PlanError::ApiRequestFailed(RequestFailure::from_reqwest(&e)),
            MapsError::Forbidden => PlanError::ApiRequestFailed(RequestFailure::Forbidden),
            MapsError::Api { status, message } => {
                PlanError::ApiRequestFailed(RequestFailure::Status { status, message })
            }
            MapsError::InvalidApiKey => {
                PlanError::ApiRequestFailed(RequestFailure::Transport(err.to_string()))
            }
            MapsError::Json { .. } | MapsError::Status { .. } | MapsError::Response(_) => {
                PlanError::ApiResponseError(err.to_string())
            }
        }
    }
}

impl From<GeocodeError> for PlanError {
    fn from(err: GeocodeError) -> Self {
        match err {
            GeocodeError::NotFound(location) => PlanError::LocationNotFound(location),
            GeocodeError::Http(e) => PlanError::ApiRequestFailed(RequestFailure::from_reqwest(&e)),
            GeocodeError::Api { status: 403, .. } => {
                PlanError::ApiRequestFailed(RequestFailure::Forbidden)
            }
            GeocodeError::Api { status, message } => {
                PlanError::ApiRequestFailed(RequestFailure::Status { status, message })
            }
            GeocodeError::InvalidUserAgent => {
                PlanError::ApiRequestFailed(RequestFailure::Transport(err.to_string()))
            }
            GeocodeError::Json { .. } | GeocodeError::InvalidCoordinate { .. } => {
                PlanError::ApiResponseError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::UnreachableWithinDuration {
            direct_secs: 4000,
            budget_secs: 3600,
        };
        assert_eq!(
            err.to_string(),
            "ending location not reachable within the specified duration \
             (direct trip takes 4000s, budget is 3600s)"
        );

        let err = PlanError::NoNearbyPlacesFound;
        assert_eq!(
            err.to_string(),
            "no nearby places found within the specified duration"
        );

        let err = PlanError::ApiRequestFailed(RequestFailure::Status {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.to_string(), "API request failed: status 500: boom");
    }

    #[test]
    fn maps_forbidden_is_distinct() {
        let err = PlanError::from(MapsError::Forbidden);
        assert!(err.is_forbidden());

        let err = PlanError::from(MapsError::Api {
            status: 500,
            message: String::new(),
        });
        assert!(!err.is_forbidden());
        assert!(matches!(
            err,
            PlanError::ApiRequestFailed(RequestFailure::Status { status: 500, .. })
        ));
    }

    #[test]
    fn maps_payload_errors_are_response_errors() {
        let err = PlanError::from(MapsError::Status {
            status: "ZERO_RESULTS".into(),
        });
        assert!(matches!(err, PlanError::ApiResponseError(msg) if msg.contains("ZERO_RESULTS")));

        let err = PlanError::from(MapsError::Response("no routes returned".into()));
        assert!(matches!(err, PlanError::ApiResponseError(_)));
    }

    #[test]
    fn geocode_errors_map_to_plan_errors() {
        let err = PlanError::from(GeocodeError::NotFound("Atlantis".into()));
        assert!(matches!(err, PlanError::LocationNotFound(l) if l == "Atlantis"));

        let err = PlanError::from(GeocodeError::Api {
            status: 403,
            message: "blocked".into(),
        });
        assert!(err.is_forbidden());

        let err = PlanError::from(GeocodeError::Json {
            message: "bad".into(),
        });
        assert!(matches!(err, PlanError::ApiResponseError(_)));
    }
}
