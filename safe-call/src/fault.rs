//! Fault taxonomy reported by transports

use std::error::Error as StdError;
use thiserror::Error;

/// Every way a transport can fail to hand back a decoded response.
///
/// The set is closed so that classification is an exhaustive `match`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFault {
    /// The server answered with a non-success status
    #[error("HTTP status {status}")]
    Status { status: u16, body: String },

    /// The host name could not be resolved
    #[error("Could not resolve host{}", host_suffix(.host))]
    NameResolution { host: Option<String> },

    /// A connection could not be established
    #[error("Connection failed: {message}")]
    Connect { message: String },

    /// Anything else: timeouts, undecodable success bodies, cancelled calls
    #[error("{message}")]
    Other { message: String },
}

impl TransportFault {
    pub fn status<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn name_resolution<S: Into<String>>(host: S) -> Self {
        Self::NameResolution {
            host: Some(host.into()),
        }
    }

    pub fn connect<S: Into<String>>(message: S) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Map a reqwest error onto the taxonomy.
    ///
    /// A status carried by the error wins; otherwise connect errors are split
    /// into name resolution and connection failures by inspecting the source
    /// chain. Everything else, timeouts included, is `Other`.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::status(status.as_u16(), String::new());
        }

        if err.is_connect() {
            if mentions_dns_failure(err) {
                return Self::NameResolution {
                    host: err.url().and_then(|url| url.host_str()).map(str::to_string),
                };
            }
            return Self::connect(err.to_string());
        }

        Self::other(err.to_string())
    }

    /// HTTP status observed, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(err: reqwest::Error) -> Self {
        Self::from_reqwest(&err)
    }
}

fn host_suffix(host: &Option<String>) -> String {
    host.as_deref().map(|h| format!(" '{h}'")).unwrap_or_default()
}

/// Walk the source chain looking for a resolver failure
fn mentions_dns_failure(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(error) = current {
        let text = error.to_string().to_ascii_lowercase();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        current = error.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapper(std::io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "client error (Connect)")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_dns_failure_found_in_source_chain() {
        let err = Wrapper(std::io::Error::other("dns error: failed to lookup address information"));
        assert!(mentions_dns_failure(&err));

        let err = Wrapper(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused (os error 111)",
        ));
        assert!(!mentions_dns_failure(&err));
    }

    #[test]
    fn test_fault_display() {
        assert_eq!(TransportFault::status(500, "boom").to_string(), "HTTP status 500");
        assert_eq!(
            TransportFault::name_resolution("api.invalid").to_string(),
            "Could not resolve host 'api.invalid'"
        );
        assert_eq!(
            TransportFault::NameResolution { host: None }.to_string(),
            "Could not resolve host"
        );
        assert_eq!(TransportFault::other("timed out").to_string(), "timed out");
    }

    #[test]
    fn test_status_code_only_for_status_faults() {
        assert_eq!(TransportFault::status(401, "").status_code(), Some(401));
        assert_eq!(TransportFault::connect("refused").status_code(), None);
        assert_eq!(TransportFault::other("x").status_code(), None);
    }
}
