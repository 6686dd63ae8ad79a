//! Exchange Rate Client
//!
//! Builds authenticated requests for the four API calls and collapses every
//! outcome into an `ApiResult`. Contains no HTTP library code - the transport
//! is injected.

use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

use oxr_types::{
    ApiOptions, ApiResult, ConfigError, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

/// Host and path prefix shared by every endpoint.
pub const API_HOST: &str = "openexchangerates.org/api";

/// Why a single request did not produce a usable body.
///
/// All variants end up as `{"error": ...}` for the caller; they are kept
/// apart so the failure can be logged accurately.
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Upstream returned status {}", .0.status)]
    Status(HttpResponse),

    #[error("Response body is not valid JSON: {source}")]
    Decode {
        response: HttpResponse,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RequestFailure {
    /// The response received before failing, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            RequestFailure::Transport(err) => err.response(),
            RequestFailure::Status(response) => Some(response),
            RequestFailure::Decode { response, .. } => Some(response),
            RequestFailure::InvalidUrl(_) => None,
        }
    }

    /// Decodes the response body as JSON.
    ///
    /// `None` when there was no response or its body is not JSON.
    pub fn error_body(&self) -> Option<Value> {
        self.response()
            .and_then(|response| serde_json::from_str(&response.body).ok())
    }
}

/// Client for the Open Exchange Rates API.
///
/// Generic over `T: HttpTransport`. Pass `&T` or `Arc<T>` to keep ownership
/// of the transport outside the client.
///
/// Setters take `&mut self`, so configuration cannot change while a request
/// borrowed from the same client is in flight.
#[derive(Clone)]
pub struct ExchangeRateClient<T: HttpTransport> {
    app_id: String,
    base_currency: String,
    https: bool,
    transport: T,
}

impl<T: HttpTransport> ExchangeRateClient<T> {
    /// Creates a new client.
    ///
    /// Fails if `app_id` is empty or only whitespace.
    pub fn new(
        app_id: impl Into<String>,
        options: ApiOptions,
        transport: T,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        if app_id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }

        Ok(Self {
            app_id,
            base_currency: options.base_currency,
            https: options.https,
            transport,
        })
    }

    /// API root for the current scheme, e.g. `https://openexchangerates.org/api`.
    pub fn endpoint(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{scheme}://{API_HOST}")
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn use_https(&self) -> bool {
        self.https
    }

    pub fn set_https(&mut self, https: bool) {
        self.https = https;
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn set_base_currency(&mut self, base_currency: impl Into<String>) {
        self.base_currency = base_currency.into();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // API Calls
    // ─────────────────────────────────────────────────────────────────────────────

    /// Latest rates.
    ///
    /// `base` overrides the configured base currency for this call only.
    /// `symbols` restricts the rates returned and is sent in the given order.
    pub async fn latest(&self, symbols: &[&str], base: Option<&str>) -> ApiResult {
        let request = self.build_latest(symbols, base);
        self.run(request).await
    }

    /// All currencies the API knows about.
    pub async fn currencies(&self) -> ApiResult {
        let request = self.build_currencies();
        self.run(request).await
    }

    /// Converts `value` from one currency to another.
    pub async fn convert(&self, value: f64, from: &str, to: &str) -> ApiResult {
        match self.build_convert(value, from, to) {
            Ok(request) => self.run(request).await,
            Err(failure) => {
                tracing::warn!(error = %failure, "Exchange rate request not sent");
                ApiResult::failure(failure.error_body())
            }
        }
    }

    /// Rates on a past day, always against the configured base currency.
    pub async fn historical(&self, date: NaiveDate) -> ApiResult {
        let request = self.build_historical(date);
        self.run(request).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Request Building
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn build_latest(&self, symbols: &[&str], base: Option<&str>) -> HttpRequest {
        let request = self
            .authenticated("/latest.json")
            .with_query("base", base.unwrap_or(&self.base_currency));

        if symbols.is_empty() {
            request
        } else {
            request.with_query("symbols", symbols.join(","))
        }
    }

    pub fn build_currencies(&self) -> HttpRequest {
        self.authenticated("/currencies.json")
    }

    /// `value` is written in its shortest round-trip form, so `10.0` becomes `10`.
    /// Each segment is percent-encoded, so `from`/`to` cannot change the path.
    pub fn build_convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<HttpRequest, RequestFailure> {
        let mut url = reqwest::Url::parse(&self.endpoint())
            .map_err(|e| RequestFailure::InvalidUrl(e.to_string()))?;

        let value = value.to_string();
        url.path_segments_mut()
            .map_err(|_| RequestFailure::InvalidUrl("endpoint cannot hold a path".into()))?
            .extend(["convert", value.as_str(), from, to]);

        Ok(HttpRequest::get(url.to_string()).with_query("app_id", &self.app_id))
    }

    pub fn build_historical(&self, date: NaiveDate) -> HttpRequest {
        self.authenticated(&format!("/historical/{}.json", date.format("%Y-%m-%d")))
            .with_query("base", &self.base_currency)
    }

    fn authenticated(&self, path: &str) -> HttpRequest {
        HttpRequest::get(format!("{}{}", self.endpoint(), path)).with_query("app_id", &self.app_id)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Execution
    // ─────────────────────────────────────────────────────────────────────────────

    async fn run(&self, request: HttpRequest) -> ApiResult {
        let url = request.url.clone();
        tracing::debug!(%url, "Exchange rate request");

        let outcome = self.dispatch(request).await.map_err(|failure| {
            tracing::warn!(%url, error = %failure, "Exchange rate request failed");
            failure.error_body()
        });

        ApiResult::from(outcome)
    }

    /// Sends the request and decodes a 2xx body.
    pub(crate) async fn dispatch(&self, request: HttpRequest) -> Result<Value, RequestFailure> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(RequestFailure::Status(response));
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => Ok(body),
            Err(source) => Err(RequestFailure::Decode { response, source }),
        }
    }
}

impl<T: HttpTransport> fmt::Debug for ExchangeRateClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeRateClient")
            .field("app_id", &"<redacted>")
            .field("base_currency", &self.base_currency)
            .field("https", &self.https)
            .finish_non_exhaustive()
    }
}
