use crate::fault::TransportFault;
use crate::types::StructuredResponse;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Converts raw reqwest responses into envelopes or status faults
#[derive(Clone)]
pub struct ResponseConverterImpl;

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self
    }

    /// Read the whole body and decode it.
    ///
    /// Non-2xx statuses become [`TransportFault::Status`] carrying the raw body
    /// text so the classifier can decode it. A blank 2xx body decodes to an
    /// envelope with no result.
    pub async fn convert_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<StructuredResponse<T>, TransportFault> {
        let status = response.status();
        let body = response.text().await;

        if !status.is_success() {
            return Err(status_fault(status.as_u16(), body));
        }

        decode_success_body(&body?)
    }
}

impl Default for ResponseConverterImpl {
    fn default() -> Self {
        Self::new()
    }
}

/// The observed status survives a body that could not be read
fn status_fault<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> TransportFault {
    let body = body.unwrap_or_else(|err| {
        debug!(status, error = %err, "failed to read error body");
        String::new()
    });
    TransportFault::status(status, body)
}

fn decode_success_body<T: DeserializeOwned>(body: &str) -> Result<StructuredResponse<T>, TransportFault> {
    if body.trim().is_empty() {
        return Ok(StructuredResponse::default());
    }

    serde_json::from_str(body)
        .map_err(|e| TransportFault::other(format!("Failed to decode response body: {}", e)))
}
