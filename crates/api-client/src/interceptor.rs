use async_trait::async_trait;
use reqwest::RequestBuilder;

/// Cross-cutting mutation applied to every outgoing request before it is
/// sent. Implementations may attach headers (e.g. auth tokens) but must not
/// change the method, path or body of the request.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// The default interceptor: forwards the request untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

#[async_trait]
impl RequestInterceptor for Passthrough {
    async fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}
