//! In-memory [`Transport`] for exercising clients without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    errors::{TransportError, TransportErrorKind},
    transport::{ApiRequest, Transport},
    types::RawResponse,
};

/// Replays queued responses in order and records every request it receives.
///
/// Once the queue is empty further requests fail with a transport error, so
/// an unexpected extra request shows up as a test failure.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: RawResponse) {
        self.lock_responses().push_back(Ok(response));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(RawResponse::new(status, body.to_string()));
    }

    pub fn push_error(&self, error: TransportError) {
        self.lock_responses().push_back(Err(error));
    }

    /// Builder form of [`push_json`](Self::push_json).
    pub fn with_json(self, status: u16, body: Value) -> Self {
        self.push_json(status, body);
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<RawResponse, TransportError>>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_request(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let path = request.path.clone();
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        self.lock_responses().pop_front().unwrap_or_else(|| {
            Err(TransportError::new(
                TransportErrorKind::Other,
                format!("no response queued for {}", path),
            ))
        })
    }
}

/// A collection body: `data` plus a `meta.pagination` block.
pub fn page_body(data: Vec<Value>, current_page: u64, total_pages: u64, total: u64, per_page: u64) -> Value {
    json!({
        "data": data.clone(),
        "meta": {
            "pagination": {
                "total": total,
                "count": data.len(),
                "per_page": per_page,
                "current_page": current_page,
                "total_pages": total_pages,
            }
        }
    })
}

/// A single-resource body: `{"data": data}`.
pub fn item_body(data: Value) -> Value {
    json!({ "data": data, "meta": [] })
}

/// An error body with one entry.
pub fn error_body(status: u16, title: &str, detail: &str) -> Value {
    json!({
        "errors": [{ "title": title, "detail": detail, "status": status }],
        "meta": []
    })
}
