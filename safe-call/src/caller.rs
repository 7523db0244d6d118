use crate::classifier::OutcomeClassifier;
use crate::config::SafeCallConfig;
use crate::decoder::JsonBodyDecoder;
use crate::error::Result;
use crate::http::{ApiRequest, HttpTransport};
use crate::outcome::Outcome;
use crate::traits::{BodyDecoder, Transport};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Performs requests through a [`Transport`] and classifies each result
#[derive(Clone)]
pub struct SafeCaller<Tr, D = JsonBodyDecoder> {
    transport: Tr,
    classifier: OutcomeClassifier<D>,
}

impl<Tr: Transport> SafeCaller<Tr> {
    pub fn new(transport: Tr) -> Self {
        Self {
            transport,
            classifier: OutcomeClassifier::new(),
        }
    }
}

impl SafeCaller<HttpTransport> {
    /// Build a caller backed by the HTTP transport described in `config`
    pub fn from_config(config: &SafeCallConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(&config.transport)?))
    }
}

impl<Tr: Transport, D: BodyDecoder> SafeCaller<Tr, D> {
    pub fn with_classifier(transport: Tr, classifier: OutcomeClassifier<D>) -> Self {
        Self {
            transport,
            classifier,
        }
    }

    /// Perform `request` once and classify the result
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn call<T>(&self, request: &ApiRequest) -> Result<Outcome<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.classifier
            .classify(|| self.transport.send::<T>(request))
            .await
    }
}
