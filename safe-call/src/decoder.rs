use crate::error::{Result, SafeCallError};
use crate::traits::BodyDecoder;
use crate::types::{ErrorResponse, StructuredResponse};
use serde_json::Value;

/// JSON implementation of [`BodyDecoder`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBodyDecoder;

impl JsonBodyDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl BodyDecoder for JsonBodyDecoder {
    fn decode_structured(&self, body: &str) -> Result<StructuredResponse<Value>> {
        serde_json::from_str(body).map_err(SafeCallError::malformed_body)
    }

    fn decode_error(&self, body: &str) -> Result<ErrorResponse> {
        serde_json::from_str(body).map_err(SafeCallError::malformed_body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponsePayload;

    #[test]
    fn test_decode_structured() {
        let decoder = JsonBodyDecoder::new();
        let response = decoder
            .decode_structured(r#"{"result": null, "detail": "Email already taken"}"#)
            .unwrap();

        assert_eq!(response.result, ResponsePayload::Absent);
        assert_eq!(response.detail.as_deref(), Some("Email already taken"));
    }

    #[test]
    fn test_decode_error_tolerates_extra_fields() {
        let decoder = JsonBodyDecoder::new();
        let response = decoder
            .decode_error(r#"{"detail": "Token expired", "code": 40101}"#)
            .unwrap();
        assert_eq!(response.detail.as_deref(), Some("Token expired"));

        let response = decoder.decode_error("{}").unwrap();
        assert_eq!(response.detail, None);
    }

    #[test]
    fn test_malformed_bodies() {
        let decoder = JsonBodyDecoder::new();

        assert!(decoder.decode_error("<html>Bad Gateway</html>").unwrap_err().is_malformed_body());
        assert!(decoder.decode_structured("").unwrap_err().is_malformed_body());
    }
}
