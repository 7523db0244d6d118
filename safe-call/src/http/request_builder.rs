use crate::config::TransportConfig;
use crate::error::{Result, SafeCallError};
use crate::fault::TransportFault;
use reqwest::{Client, Method, Request};
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// A single remote call to perform, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: HashMap<String, String>,
}

impl ApiRequest {
    /// Create a request from a textual method such as `"POST"`
    pub fn new(method: &str, path: impl Into<String>) -> Result<Self> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| SafeCallError::invalid_request(format!("Invalid HTTP method: {method}")))?;
        Ok(Self::with_method(method, path))
    }

    pub fn with_method(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HashMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::with_method(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::with_method(Method::POST, path).with_body(body)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Turns [`ApiRequest`] values into reqwest requests against one base URL
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    base_url: Url,
    headers: HashMap<String, String>,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, config: &TransportConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url)?,
            headers: config.headers.clone().unwrap_or_default(),
        })
    }

    /// Build the reqwest request; configured headers apply first, request headers win
    pub fn build_request(&self, request: &ApiRequest) -> std::result::Result<Request, TransportFault> {
        let url = self.resolve_url(&request.path).map_err(|e| {
            TransportFault::other(format!("Invalid request path '{}': {}", request.path, e))
        })?;

        // Header names are case-insensitive
        let mut headers = HashMap::new();
        for (key, value) in self.headers.iter().chain(request.headers.iter()) {
            headers.insert(key.to_ascii_lowercase(), value.clone());
        }

        let mut request_builder = self.client.request(request.method.clone(), url);
        for (key, value) in headers {
            request_builder = request_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            request_builder = request_builder.json(body);
        }

        Ok(request_builder.build()?)
    }

    /// Join a request path onto the base URL, keeping any base path prefix
    pub fn resolve_url(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}

/// Parse a base URL and make sure its path ends with `/` so joins append
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
