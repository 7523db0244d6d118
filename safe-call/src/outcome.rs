//! The closed set of results a safe call can produce

use crate::types::StructuredResponse;
use std::fmt;

/// Result of one classified remote call. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call succeeded and produced meaningful content
    Success(StructuredResponse<T>),
    /// The call succeeded but carried nothing worth surfacing
    Empty,
    /// The call failed or was semantically rejected
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn failure(kind: FailureKind, status_code: Option<u16>, message: Option<String>) -> Self {
        Self::Failure(Failure::new(kind, status_code, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The successful response, if any
    pub fn payload(&self) -> Option<&StructuredResponse<T>> {
        match self {
            Self::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Collapse into a `Result`, with `Empty` becoming `Ok(None)`
    pub fn into_result(self) -> Result<Option<StructuredResponse<T>>, Failure> {
        match self {
            Self::Success(response) => Ok(Some(response)),
            Self::Empty => Ok(None),
            Self::Failure(failure) => Err(failure),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(StructuredResponse<T>) -> StructuredResponse<U>,
    {
        match self {
            Self::Success(response) => Outcome::Success(f(response)),
            Self::Empty => Outcome::Empty,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

/// Details of a failed or rejected call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    /// Present only when a real HTTP status was observed
    pub status_code: Option<u16>,
    pub message: Option<String>,
}

impl Failure {
    pub fn new(kind: FailureKind, status_code: Option<u16>, message: Option<String>) -> Self {
        Self {
            kind,
            status_code,
            message,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(status) = self.status_code {
            write!(f, " (status {status})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

/// Why a call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service understood the request but rejected its content
    ApiRejected,
    /// Authorization is no longer valid (401)
    AuthExpired,
    /// Any other error status reported by the service
    ServerFault,
    /// Host resolution or connection establishment failed
    NoConnectivity,
    /// Anything else
    Unclassified,
}

impl FailureKind {
    /// Whether repeating the same request could plausibly succeed
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ServerFault | Self::NoConnectivity)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiRejected => "api_rejected",
            Self::AuthExpired => "auth_expired",
            Self::ServerFault => "server_fault",
            Self::NoConnectivity => "no_connectivity",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ApiRejected => "Request rejected by API",
            Self::AuthExpired => "Authorization expired",
            Self::ServerFault => "Server error",
            Self::NoConnectivity => "No connectivity",
            Self::Unclassified => "Unexpected failure",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponsePayload;

    #[test]
    fn test_into_result() {
        let success = Outcome::Success(StructuredResponse::new(ResponsePayload::Single(3)));
        assert_eq!(success.into_result().unwrap().unwrap().result, ResponsePayload::Single(3));

        assert_eq!(Outcome::<u8>::Empty.into_result(), Ok(None));

        let failure = Outcome::<u8>::failure(FailureKind::AuthExpired, Some(401), None);
        assert_eq!(failure.into_result().unwrap_err().kind, FailureKind::AuthExpired);
    }

    #[test]
    fn test_map_keeps_variant() {
        let success = Outcome::Success(StructuredResponse::new(ResponsePayload::List(vec![1, 2])));
        let mapped = success.map(|response| StructuredResponse {
            result: response.result.map(|n| n * 10),
            validation_errors: response.validation_errors,
            detail: response.detail,
        });
        assert_eq!(
            mapped.payload().map(|r| &r.result),
            Some(&ResponsePayload::List(vec![10, 20]))
        );

        let failure = Outcome::<u8>::failure(FailureKind::Unclassified, None, None);
        assert!(failure.map(|r| r).is_failure());
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure::new(FailureKind::ServerFault, Some(503), Some("down\n".to_string()));
        assert_eq!(failure.to_string(), "Server error (status 503): down");

        let failure = Failure::new(FailureKind::NoConnectivity, None, None);
        assert_eq!(failure.to_string(), "No connectivity");
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(FailureKind::ServerFault.is_retryable());
        assert!(FailureKind::NoConnectivity.is_retryable());
        assert!(!FailureKind::ApiRejected.is_retryable());
        assert!(!FailureKind::AuthExpired.is_retryable());
        assert!(!FailureKind::Unclassified.is_retryable());
    }
}
