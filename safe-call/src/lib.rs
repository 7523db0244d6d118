//! Safe Call - uniform outcomes for remote API calls
//!
//! This crate wraps a single remote call and converts everything that can
//! happen to it (a useful payload, an empty answer, a validation rejection, an
//! error status, a connectivity problem or anything unexpected) into one
//! exhaustively matchable [`Outcome`].

// Core modules
pub mod error;
pub mod fault;
pub mod outcome;
pub mod types;

// Classification
pub mod classifier;
pub mod decoder;
pub mod traits;

// Transport and configuration
pub mod caller;
pub mod config;
pub mod http;

pub mod testing;

// Re-export main types for convenience
pub use caller::SafeCaller;
pub use classifier::{safe_call, OutcomeClassifier};
pub use config::{SafeCallConfig, TransportConfig};
pub use decoder::JsonBodyDecoder;
pub use error::{Result, SafeCallError};
pub use fault::TransportFault;
pub use http::{ApiRequest, HttpTransport};
pub use outcome::{Failure, FailureKind, Outcome};
pub use traits::{BodyDecoder, Transport};
pub use types::{ErrorResponse, ResponsePayload, StructuredResponse, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Route tracing output through the test writer; filter with RUST_LOG
    fn init_tracing() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_test_writer()
                .try_init();
        });
    }

    #[test]
    fn test_error_types() {
        let error = SafeCallError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));

        let error = SafeCallError::invalid_request("bad method");
        assert!(error.to_string().contains("Invalid request"));
    }

    #[tokio::test]
    async fn test_reexported_entry_point() {
        init_tracing();

        let outcome = safe_call(|| async {
            Ok::<_, TransportFault>(StructuredResponse::new(ResponsePayload::Single(42)))
        })
        .await
        .unwrap();

        match outcome {
            Outcome::Success(response) => assert_eq!(response.result, ResponsePayload::Single(42)),
            Outcome::Empty | Outcome::Failure(_) => panic!("expected success"),
        }
    }
}
