//! reqwest backed IRIS transport

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::instrument;
use url::Url;

use crate::environment::Environment;
use crate::error::HttpError;
use crate::response::Response;
use crate::transport::{Method, Transport};

const APPLICATION_JSON: &str = "application/json";

/// HTTP client wrapper
///
/// Authenticates every request with HTTP Basic, using the API key as the user
/// name and an empty password.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    environment: Environment,
    iris_url: String,
    api_key: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("environment", &self.environment)
            .field("iris_url", &self.iris_url)
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Environment the client was built for
    pub fn environment(&self) -> Environment {
        self.environment
    }
}

#[async_trait]
impl Transport for HttpClient {
    fn iris_url(&self) -> String {
        self.iris_url.clone()
    }

    #[instrument(skip(self, body))]
    async fn call(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Response<Vec<u8>> {
        let mut request = self
            .inner
            .request(method.into(), url)
            .basic_auth(&self.api_key, None::<&str>)
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("IRIS responded {} to {} {}", status, method, url);
            let message = match response.text().await {
                Ok(message) => message,
                Err(err) => {
                    tracing::warn!("Could not read {} response body: {}", status, err);
                    String::new()
                }
            };
            return Err(HttpError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// HTTP client builder for credentials, environment and network settings
#[derive(Default)]
pub struct HttpClientBuilder {
    environment: Environment,
    api_key: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    proxy: Option<Url>,
    accept_invalid_certs: bool,
}

impl fmt::Debug for HttpClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClientBuilder")
            .field("environment", &self.environment)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl HttpClientBuilder {
    /// Target environment, defaults to [`Environment::Sandbox`]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// IRIS API key (creator or approver key)
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the environment's IRIS URL entirely
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Per request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: Url) -> Self {
        self.proxy = Some(url);
        self
    }

    /// Accept invalid TLS certificates
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| HttpError::Build("API key is required".to_string()))?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| HttpError::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let iris_url = match self.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => self.environment.iris_url(),
        };

        let inner = builder.build().map_err(HttpError::from)?;

        Ok(HttpClient {
            inner,
            environment: self.environment,
            iris_url,
            api_key,
        })
    }
}
