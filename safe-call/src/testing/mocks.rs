use crate::fault::TransportFault;
use crate::http::ApiRequest;
use crate::traits::Transport;
use crate::types::StructuredResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock transport that answers every request with the same reply
#[derive(Clone)]
pub struct MockTransport {
    reply: Result<Value, TransportFault>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Reply with `body` decoded as the response envelope
    pub fn replying(body: Value) -> Self {
        Self {
            reply: Ok(body),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every request with `fault`
    pub fn failing(fault: TransportFault) -> Self {
        Self {
            reply: Err(fault),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests().len()
    }
}

impl Transport for MockTransport {
    async fn send<T>(&self, request: &ApiRequest) -> Result<StructuredResponse<T>, TransportFault>
    where
        T: DeserializeOwned + Send,
    {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        match &self.reply {
            Ok(body) => serde_json::from_value(body.clone())
                .map_err(|e| TransportFault::other(format!("Failed to decode response body: {}", e))),
            Err(fault) => Err(fault.clone()),
        }
    }
}

/// Helper functions for creating test data
pub mod test_helpers {
    use crate::types::{StructuredResponse, ValidationError};
    use serde_json::Value;

    /// Decode a JSON literal into an envelope; panics on a malformed fixture
    pub fn create_response(body: Value) -> StructuredResponse<Value> {
        serde_json::from_value(body).expect("invalid response fixture")
    }

    pub fn create_validation_errors(messages: &[&str]) -> Vec<ValidationError> {
        messages.iter().copied().map(ValidationError::new).collect()
    }
}
