//! Shared helpers for orcid-core integration tests

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use orcid_core::{
    HttpError, HttpResponse, HttpTransport, ManualClock, MemoryCache, OrcidSource,
    PublicationResolver,
};

/// A recorded outbound request
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// Transport that replays one canned outcome and records every call
pub struct FakeTransport {
    outcome: Mutex<Result<HttpResponse, HttpError>>,
    calls: Mutex<Vec<RecordedRequest>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::with_outcome(Ok(HttpResponse {
            status,
            body: body.to_string(),
            headers: HashMap::new(),
        }))
    }

    pub fn failing(error: HttpError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<HttpResponse, HttpError>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replace the canned outcome for later calls
    pub fn respond_with(&self, status: u16, body: &str) {
        *self.outcome.lock().unwrap() = Ok(HttpResponse {
            status,
            body: body.to_string(),
            headers: HashMap::new(),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        self.calls.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.outcome.lock().unwrap().clone()
    }
}

/// Resolver wired to a fake transport and a manual clock
pub struct Harness {
    pub transport: Arc<FakeTransport>,
    pub clock: Arc<ManualClock>,
    pub resolver: PublicationResolver,
}

#[allow(dead_code)]
impl Harness {
    pub fn new(transport: FakeTransport) -> Self {
        let transport = Arc::new(transport);
        let clock = Arc::new(ManualClock::default());
        let cache = Arc::new(MemoryCache::with_clock(clock.clone()));
        let resolver = PublicationResolver::new(OrcidSource::new(transport.clone()), cache);

        Self {
            transport,
            clock,
            resolver,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }
}
