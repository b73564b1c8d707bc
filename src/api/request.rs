//! Request / Response Shapes
//!
//! Transport-independent description of one API call.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{reason_from_body, ApiError};

pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Only create/update verbs send a body
    pub fn carries_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully built request, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request for `path` under `base_url`.
    ///
    /// The payload is encoded only for POST and PUT; it is dropped otherwise.
    pub fn build<P>(base_url: &str, path: &str, method: Method, payload: Option<&P>) -> Result<Self, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = match payload {
            Some(data) if method.carries_body() => {
                Some(serde_json::to_string(data).map_err(|e| ApiError::Encode(e.to_string()))?)
            }
            _ => None,
        };

        Ok(Self {
            method,
            url: format!("{}{}", base_url, path),
            headers: vec![("Content-Type", CONTENT_TYPE.to_string())],
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and full body text of a completed response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as `R`.
    ///
    /// A non-2xx status is always an error, whether or not the body parses;
    /// a 2xx body that fails to decode is an error too.
    pub fn decode<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status,
                message: reason_from_body(&self.body),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
