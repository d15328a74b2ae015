//! Mock image loader for testing.
//!
//! Responses are configured per URL. A URL can be held so its load only
//! completes once the test releases it, which lets tests choose the order in
//! which parallel loads finish.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::ImageLoadError;
use crate::traits::{ImageLoader, LoadedImage};

/// Configuration for a mock image response.
#[derive(Debug, Clone)]
pub enum MockImageResponse {
    /// Load succeeds with these dimensions
    Loaded { width: u32, height: u32 },
    /// Load fails with this error
    Error(ImageLoadError),
}

/// Handle that releases a held image load.
#[derive(Debug, Clone)]
pub struct ImageGate(Arc<Notify>);

impl ImageGate {
    /// Let the held load complete. Releasing before the load starts is
    /// remembered.
    pub fn release(&self) {
        self.0.notify_one();
    }
}

/// Mock image loader.
#[derive(Debug, Clone, Default)]
pub struct MockImageLoader {
    responses: Arc<Mutex<HashMap<String, MockImageResponse>>>,
    default_response: Arc<Mutex<Option<MockImageResponse>>>,
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for an exact URL.
    pub fn set_response(&self, url: &str, response: MockImageResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set the response for URLs without a specific match.
    pub fn set_default_response(&self, response: MockImageResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Hold loads of `url` until the returned gate is released.
    pub fn hold(&self, url: &str) -> ImageGate {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(url.to_string(), Arc::clone(&notify));
        ImageGate(notify)
    }

    /// URLs requested so far, in request order.
    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn get_response(&self, url: &str) -> Option<MockImageResponse> {
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageLoader for MockImageLoader {
    async fn load(&self, url: &str) -> Result<LoadedImage, ImageLoadError> {
        self.requests.lock().unwrap().push(url.to_string());

        let gate = self.gates.lock().unwrap().get(url).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.get_response(url) {
            Some(MockImageResponse::Loaded { width, height }) => {
                Ok(LoadedImage::new(width, height, url))
            }
            Some(MockImageResponse::Error(err)) => Err(err),
            None => Err(ImageLoadError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
