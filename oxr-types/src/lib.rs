//! # OXR Types
//!
//! Plain data and port traits for the Open Exchange Rates client.
//! This crate performs no IO - only data structures, error types and
//! the trait a transport adapter must implement.
//!
//! ## Layout
//!
//! - `http` - Requests and responses described as plain data
//! - `options` - Per-client API options (base currency, https)
//! - `result` - The normalized `ApiResult` returned to callers
//! - `error` - Configuration and transport errors
//! - `ports` - The `HttpTransport` trait

pub mod error;
pub mod http;
pub mod options;
pub mod ports;
pub mod result;

// Re-export commonly used types
pub use error::{ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use options::ApiOptions;
pub use ports::HttpTransport;
pub use result::ApiResult;
