#![allow(dead_code)]

use async_trait::async_trait;
use relay_dns_application::ports::UpstreamForwarder;
use relay_dns_domain::DomainError;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockUpstreamForwarder {
    response: Arc<Mutex<Result<Vec<u8>, DomainError>>>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockUpstreamForwarder {
    pub fn new() -> Self {
        Self::with_response(vec![0xAB, 0xCD, 0x81, 0x80])
    }

    pub fn with_response(bytes: Vec<u8>) -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok(bytes))),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Arc::new(Mutex::new(Err(error))),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

impl Default for MockUpstreamForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.received.lock().unwrap().push(query.to_vec());
        self.response.lock().unwrap().clone()
    }

    fn remote(&self) -> &str {
        "mock:53"
    }
}
