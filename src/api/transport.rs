//! HTTP Transport
//!
//! The network boundary of the gateway. The browser build sends requests
//! through `fetch`; tests plug in an in-memory implementation.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use super::error::ApiError;
use super::request::{ApiRequest, Method, RawResponse};

/// Performs one request and returns the complete response.
///
/// Implementations make a single attempt: no retry, timeout or cancellation.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match &request.body {
            Some(body) => builder.body(body.as_str())?,
            None => builder.build()?,
        };

        let response = prepared.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
