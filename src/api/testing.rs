//! In-memory transport and alert sink for gateway tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use leptos_alerts::{AlertSink, Severity};

use super::{ApiClient, ApiError, ApiRequest, RawResponse, Transport};
use crate::config::ApiConfig;

/// Replays queued responses and records every request it sees
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    pub seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}

#[derive(Clone, Default)]
pub struct RecordedAlerts(pub Rc<RefCell<Vec<(String, Severity)>>>);

impl AlertSink for RecordedAlerts {
    fn alert(&self, message: &str, severity: Severity) {
        self.0.borrow_mut().push((message.to_string(), severity));
    }
}

pub struct Harness {
    pub client: ApiClient<MockTransport, RecordedAlerts>,
    pub requests: Rc<RefCell<Vec<ApiRequest>>>,
    pub alerts: RecordedAlerts,
}

impl Harness {
    pub fn new(transport: MockTransport) -> Self {
        let requests = Rc::clone(&transport.seen);
        let alerts = RecordedAlerts::default();
        let client = ApiClient::new(&ApiConfig::default(), transport, alerts.clone());
        Self { client, requests, alerts }
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request sent")
    }

    pub fn alert_messages(&self) -> Vec<String> {
        self.alerts.0.borrow().iter().map(|(msg, _)| msg.clone()).collect()
    }
}
