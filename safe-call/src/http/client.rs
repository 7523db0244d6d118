use crate::config::TransportConfig;
use crate::error::Result;
use crate::fault::TransportFault;
use crate::http::{ApiRequest, RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::Transport;
use crate::types::StructuredResponse;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl HttpTransport {
    /// Create a new HTTP transport with configuration
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let timeout = config.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        let follow_redirects = config.follow_redirects.unwrap_or(true);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .redirect(if follow_redirects {
                reqwest::redirect::Policy::default()
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        let request_builder = RequestBuilderImpl::new(client.clone(), config)?;
        let response_converter = ResponseConverterImpl::new();

        Ok(Self {
            client,
            request_builder,
            response_converter,
        })
    }
}

impl Transport for HttpTransport {
    async fn send<T>(&self, request: &ApiRequest) -> std::result::Result<StructuredResponse<T>, TransportFault>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.request_builder.build_request(request)?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;
        debug!(status = response.status().as_u16(), "received response");

        self.response_converter.convert_response(response).await
    }
}
