//! Response shapes exchanged with the remote API

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Envelope every successful remote call is expected to return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: DeserializeOwned", serialize = "T: Serialize"))]
pub struct StructuredResponse<T> {
    /// Substantive payload, tagged by shape when decoded
    #[serde(default)]
    pub result: ResponsePayload<T>,
    /// Field-level complaints that may accompany a 200 response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> StructuredResponse<T> {
    /// Create a response carrying only a payload
    pub fn new(result: ResponsePayload<T>) -> Self {
        Self {
            result,
            validation_errors: None,
            detail: None,
        }
    }

    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_validation_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.validation_errors = Some(errors);
        self
    }

    /// Returns `true` when at least one validation error is present
    pub fn has_validation_errors(&self) -> bool {
        self.validation_errors
            .as_ref()
            .is_some_and(|errors| !errors.is_empty())
    }

    /// Every validation message, each terminated by a newline, in order
    pub fn joined_validation_messages(&self) -> String {
        self.validation_errors
            .iter()
            .flatten()
            .map(|error| format!("{}\n", error.error_message))
            .collect()
    }
}

impl<T> Default for StructuredResponse<T> {
    fn default() -> Self {
        Self::new(ResponsePayload::Absent)
    }
}

/// Shape of the `result` field, decided once while decoding.
///
/// JSON `null` (or a missing field) is [`ResponsePayload::Absent`], an array is
/// [`ResponsePayload::List`], a boolean is [`ResponsePayload::Flag`] and any
/// other value is decoded as a single `T`. Consequently a `T` that is itself a
/// boolean or a sequence is always seen as `Flag` or `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload<T> {
    List(Vec<T>),
    Flag(bool),
    Single(T),
    Absent,
}

impl<T> Default for ResponsePayload<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> ResponsePayload<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Transform the carried values, keeping the shape
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> ResponsePayload<U> {
        match self {
            Self::List(items) => ResponsePayload::List(items.into_iter().map(f).collect()),
            Self::Flag(flag) => ResponsePayload::Flag(flag),
            Self::Single(value) => ResponsePayload::Single(f(value)),
            Self::Absent => ResponsePayload::Absent,
        }
    }
}

impl<T: DeserializeOwned> ResponsePayload<T> {
    /// Tag an already parsed JSON value
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::Bool(flag) => Ok(Self::Flag(flag)),
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<serde_json::Result<Vec<T>>>()
                .map(Self::List),
            other => serde_json::from_value(other).map(Self::Single),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ResponsePayload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}

impl<T: Serialize> Serialize for ResponsePayload<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::List(items) => items.serialize(serializer),
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Single(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// A single field-level complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub error_message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(error_message: S) -> Self {
        Self {
            error_message: error_message.into(),
        }
    }
}

/// Body shape of 401 and generic error statuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}
