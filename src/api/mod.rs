//! Backend API
//!
//! REST gateway plus typed bindings, organized by domain.

mod client;
mod error;
mod players;
mod request;
mod saves;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_FAILURE, STATUS_FALLBACK};
pub use request::{ApiRequest, Method, RawResponse};
pub use transport::{FetchTransport, Transport};

/// Characters left as-is inside a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode an identifier for use as one path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}
