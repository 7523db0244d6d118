//! Outcome classification for a single remote call
//!
//! [`OutcomeClassifier::classify`] runs a deferred call once and turns whatever
//! it produces into an [`Outcome`]. A returned envelope is inspected in a fixed
//! order (validation errors, absent result, list, flag, anything else) and a
//! fault is matched on its status code first, then its connectivity class.
//!
//! The classifier never retries and never lets a fault escape, with one
//! exception: a 422 whose body cannot be decoded is reported as
//! [`crate::error::SafeCallError::MalformedBody`]. Other error statuses tolerate a malformed
//! body by dropping the message.

use crate::decoder::JsonBodyDecoder;
use crate::error::Result;
use crate::fault::TransportFault;
use crate::outcome::{FailureKind, Outcome};
use crate::traits::BodyDecoder;
use crate::types::{ResponsePayload, StructuredResponse};
use std::future::Future;
use tracing::{debug, warn};

/// Status the success path reports for envelope-level rejections
const ENVELOPE_STATUS: u16 = 200;
const UNPROCESSABLE_ENTITY: u16 = 422;
const UNAUTHORIZED: u16 = 401;

/// Classifies call results into [`Outcome`] values
#[derive(Debug, Clone, Default)]
pub struct OutcomeClassifier<D = JsonBodyDecoder> {
    decoder: D,
}

impl OutcomeClassifier {
    /// Create a classifier that decodes error bodies as JSON
    pub fn new() -> Self {
        Self {
            decoder: JsonBodyDecoder,
        }
    }
}

impl<D: BodyDecoder> OutcomeClassifier<D> {
    /// Create a classifier with a custom error body decoder
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Execute `call` exactly once and classify what it produced
    pub async fn classify<T, F, Fut>(&self, call: F) -> Result<Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<StructuredResponse<T>, TransportFault>>,
    {
        match call().await {
            Ok(response) => Ok(self.classify_response(response)),
            Err(fault) => self.classify_fault(fault),
        }
    }

    /// Classify a response the call returned normally
    pub fn classify_response<T>(&self, response: StructuredResponse<T>) -> Outcome<T> {
        if response.has_validation_errors() {
            let message = response.joined_validation_messages();
            debug!(
                count = response.validation_errors.as_ref().map_or(0, Vec::len),
                "response carried validation errors"
            );
            return Outcome::failure(
                FailureKind::ApiRejected,
                Some(ENVELOPE_STATUS),
                Some(message),
            );
        }

        match &response.result {
            ResponsePayload::Absent => {
                debug!("response has no result");
                Outcome::Empty
            }
            ResponsePayload::List(items) if items.is_empty() => {
                debug!("response result is an empty list");
                Outcome::Empty
            }
            ResponsePayload::Flag(false) => {
                debug!("response result is false");
                Outcome::failure(
                    FailureKind::ApiRejected,
                    Some(ENVELOPE_STATUS),
                    response.detail,
                )
            }
            ResponsePayload::List(_) | ResponsePayload::Flag(true) | ResponsePayload::Single(_) => {
                Outcome::Success(response)
            }
        }
    }

    /// Classify a fault raised by the call
    pub fn classify_fault<T>(&self, fault: TransportFault) -> Result<Outcome<T>> {
        let outcome = match fault {
            TransportFault::Status {
                status: UNPROCESSABLE_ENTITY,
                body,
            } => {
                let response = self.decoder.decode_structured(&body).inspect_err(|err| {
                    warn!(status = UNPROCESSABLE_ENTITY, error = %err, "undecodable 422 body");
                })?;
                Outcome::failure(
                    FailureKind::ApiRejected,
                    Some(UNPROCESSABLE_ENTITY),
                    response.detail,
                )
            }
            TransportFault::Status {
                status: UNAUTHORIZED,
                body,
            } => Outcome::failure(
                FailureKind::AuthExpired,
                Some(UNAUTHORIZED),
                self.error_detail(UNAUTHORIZED, &body),
            ),
            TransportFault::Status { status, body } => Outcome::failure(
                FailureKind::ServerFault,
                Some(status),
                self.error_detail(status, &body),
            ),
            TransportFault::NameResolution { .. } | TransportFault::Connect { .. } => {
                Outcome::failure(FailureKind::NoConnectivity, None, None)
            }
            TransportFault::Other { message } => {
                debug!(%message, "unclassified fault");
                Outcome::failure(FailureKind::Unclassified, None, None)
            }
        };

        if let Outcome::Failure(failure) = &outcome {
            warn!(
                kind = failure.kind.as_str(),
                status = ?failure.status_code,
                "remote call failed"
            );
        }
        Ok(outcome)
    }

    /// Best-effort `detail` of an error body; malformed bodies yield `None`
    fn error_detail(&self, status: u16, body: &str) -> Option<String> {
        match self.decoder.decode_error(body) {
            Ok(response) => response.detail,
            Err(err) => {
                debug!(status, error = %err, "dropping message of undecodable error body");
                None
            }
        }
    }
}

/// Classify `call` with a default [`OutcomeClassifier`]
pub async fn safe_call<T, F, Fut>(call: F) -> Result<Outcome<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<StructuredResponse<T>, TransportFault>>,
{
    OutcomeClassifier::new().classify(call).await
}
