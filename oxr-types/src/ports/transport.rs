//! HTTP transport port.
//!
//! Implementations can wrap reqwest, a test double, or anything else able to
//! perform a GET with query parameters.

use std::sync::Arc;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Port trait for the HTTP capability the client delegates to.
///
/// Return `Ok` for every response actually received, whatever its status.
/// Return `Err` when the exchange could not complete; attach the response to
/// the error if one was received.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait::async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait::async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait::async_trait]
    impl HttpTransport for Echo {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(200, request.url))
        }
    }

    async fn body_of<T: HttpTransport>(transport: T, url: &str) -> String {
        transport.send(HttpRequest::get(url)).await.unwrap().body
    }

    #[tokio::test]
    async fn test_forwarding_impls() {
        let echo = Echo;
        assert_eq!(body_of(&echo, "a").await, "a");

        let shared: Arc<dyn HttpTransport> = Arc::new(Echo);
        assert_eq!(body_of(shared, "b").await, "b");

        let boxed: Box<dyn HttpTransport> = Box::new(Echo);
        assert_eq!(body_of(boxed, "c").await, "c");
    }
}
