//! reqwest-backed `HttpTransport`.

use oxr_types::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Default transport for production use.
///
/// Every received response is returned as `Ok`, whatever its status; only
/// failures to connect or to read the body become `TransportError`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (timeouts, proxies, TLS settings).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "Sending request");

        let builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
        };

        let resp = builder
            .query(&request.query)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = resp.status().as_u16();
        tracing::debug!(status, "Received response");

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::new(format!("failed to read body: {e}")))?;

        Ok(HttpResponse::new(status, body))
    }
}
