//! HTTP requests and responses described as plain data.
//!
//! The client builds `HttpRequest` values and interprets `HttpResponse`
//! values; the transport in between is the only part that touches the
//! network.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An outbound request: absolute URL plus ordered query pairs.
///
/// Query values are unencoded; encoding is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a GET request with no query parameters.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter, keeping insertion order.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Returns the first value for `key`, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A response as received by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_insertion_order() {
        let req = HttpRequest::get("http://example.test")
            .with_query("app_id", "abc")
            .with_query("base", "USD");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.query,
            vec![
                ("app_id".to_string(), "abc".to_string()),
                ("base".to_string(), "USD".to_string()),
            ]
        );
        assert_eq!(req.query_param("base"), Some("USD"));
        assert_eq!(req.query_param("symbols"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }
}
