use crate::error::Result;
use crate::fault::TransportFault;
use crate::http::ApiRequest;
use crate::types::{ErrorResponse, StructuredResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

/// Trait for transport implementations that perform a single remote call
pub trait Transport: Send + Sync + Clone {
    /// Execute one request, yielding the decoded envelope or a classified fault
    fn send<T>(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = std::result::Result<StructuredResponse<T>, TransportFault>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Trait for decoding raw error bodies into known shapes
pub trait BodyDecoder: Send + Sync {
    /// Decode a body as the full response envelope
    fn decode_structured(&self, body: &str) -> Result<StructuredResponse<Value>>;

    /// Decode a body as a plain error message
    fn decode_error(&self, body: &str) -> Result<ErrorResponse>;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
