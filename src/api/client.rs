//! API Client
//!
//! The request gateway: one place that builds, sends and decodes every
//! backend call, and turns any failure into an alert plus an `Err`.

use std::sync::Arc;

use leptos_alerts::{AlertSink, Notifier, Severity};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::request::{ApiRequest, Method};
use super::transport::{FetchTransport, Transport};
use crate::config::ApiConfig;

pub struct ApiClient<T = FetchTransport, N = Notifier> {
    base_url: Arc<str>,
    transport: Arc<T>,
    pub(super) alerts: N,
}

impl<T, N: Clone> Clone for ApiClient<T, N> {
    fn clone(&self) -> Self {
        Self {
            base_url: Arc::clone(&self.base_url),
            transport: Arc::clone(&self.transport),
            alerts: self.alerts.clone(),
        }
    }
}

impl ApiClient {
    /// Browser client reporting failures to `notifier`
    pub fn browser(config: &ApiConfig, notifier: Notifier) -> Self {
        Self::new(config, FetchTransport, notifier)
    }
}

impl<T: Transport, N: AlertSink> ApiClient<T, N> {
    pub fn new(config: &ApiConfig, transport: T, alerts: N) -> Self {
        Self {
            base_url: Arc::from(config.base_url.as_str()),
            transport: Arc::new(transport),
            alerts,
        }
    }

    /// Perform one request and decode the JSON body as `R`.
    ///
    /// On any failure the error is logged, shown as a danger alert, and
    /// returned so the caller can decide what else to do.
    pub async fn request<R, P>(&self, path: &str, method: Method, payload: Option<&P>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let outcome = self.perform(path, method, payload).await;
        if let Err(err) = &outcome {
            log::error!("[api] {} {} failed: {}", method, path, err);
            self.alerts.alert(&err.alert_message(), Severity::Danger);
        }
        outcome
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(path, Method::Get, None).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(path, Method::Delete, None).await
    }

    pub async fn post<R, P>(&self, path: &str, payload: &P) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(path, Method::Post, Some(payload)).await
    }

    /// POST without a body (actions such as loading a save)
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(path, Method::Post, None).await
    }

    pub async fn put<R, P>(&self, path: &str, payload: &P) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(path, Method::Put, Some(payload)).await
    }

    async fn perform<R, P>(&self, path: &str, method: Method, payload: Option<&P>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = ApiRequest::build(&self.base_url, path, method, payload)?;
        log::debug!("[api] {} {}", method, request.url);
        let response = self.transport.send(&request).await?;
        response.decode()
    }
}
