//! # OXR Client
//!
//! A client for the Open Exchange Rates API.
//!
//! ## Architecture
//!
//! - `client` - `ExchangeRateClient`, which builds requests and normalizes
//!   responses
//! - `transport` - `ReqwestTransport`, the default `HttpTransport` adapter
//!
//! The client is generic over `T: HttpTransport`, so any HTTP library (or a
//! test double) can be injected.
//!
//! ```no_run
//! use oxr_client::{ApiOptions, ExchangeRateClient, ReqwestTransport};
//!
//! # async fn run() -> Result<(), oxr_client::ConfigError> {
//! let client = ExchangeRateClient::new(
//!     "my-app-id",
//!     ApiOptions::new("USD", true),
//!     ReqwestTransport::new(),
//! )?;
//! let latest = client.latest(&["EUR", "GBP"], None).await;
//! if !latest.is_error() {
//!     println!("{}", latest["rates"]["EUR"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod transport;


pub use client::{API_HOST, ExchangeRateClient, RequestFailure};
pub use oxr_types::{
    ApiOptions, ApiResult, ConfigError, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    TransportError,
};
pub use transport::ReqwestTransport;
