//! Common test utilities for integration tests.
//!
//! Fixtures for feed pages and a coordinator wired to the mock adapters.

#![allow(dead_code)]

use std::time::Duration;

use imgboard::adapters::mock::{
    FixedHeightFactory, MockFeedResponse, MockImageLoader, MockImageResponse, MockTransport,
};
use imgboard::config::BoardConfig;
use imgboard::coordinator::{BoardEvent, LoadCoordinator, RequestCompletion};
use imgboard::feed::{FeedPage, Thread};
use tokio::sync::mpsc::UnboundedReceiver;

pub type TestCoordinator = LoadCoordinator<MockTransport, MockImageLoader, FixedHeightFactory>;

/// Base URL used by every test config.
pub const FEED: &str = "https://feed.test";

/// Config pointing at the test feed with short timeouts.
pub fn test_config() -> BoardConfig {
    BoardConfig::default()
        .with_feed_base_url(FEED)
        .with_default_channels(["pics"])
        .with_page_size(10)
        .with_fetch_timeout(Duration::from_secs(5))
        .with_image_timeout(Duration::from_secs(5))
        .with_resize_debounce(Duration::from_millis(100))
}

/// URL of the first page of the default channel.
pub fn first_page_url() -> String {
    format!("{}/r/pics/.json?limit=10", FEED)
}

/// A thread whose image lives at `https://img.test/{id}.png`.
pub fn thread(id: &str) -> Thread {
    Thread::new(id, image_url(id), format!("thread {}", id))
}

pub fn image_url(id: &str) -> String {
    format!("https://img.test/{}.png", id)
}

pub fn page(threads: Vec<Thread>, next: Option<&str>) -> MockFeedResponse {
    MockFeedResponse::Page(FeedPage::new(threads, next.map(str::to_string)))
}

/// Everything a coordinator test needs.
pub struct Harness {
    pub coordinator: TestCoordinator,
    pub events: UnboundedReceiver<BoardEvent>,
    pub transport: MockTransport,
    pub loader: MockImageLoader,
}

impl Harness {
    /// Coordinator on the default channel with every image loading as 100x100.
    pub fn new() -> Self {
        Self::with_factory(FixedHeightFactory::new())
    }

    pub fn with_factory(factory: FixedHeightFactory) -> Self {
        let transport = MockTransport::new();
        let loader = MockImageLoader::new();
        loader.set_default_response(MockImageResponse::Loaded {
            width: 100,
            height: 100,
        });

        let (coordinator, events) = LoadCoordinator::new(
            test_config(),
            transport.clone(),
            loader.clone(),
            factory,
            Vec::new(),
        );

        Self {
            coordinator,
            events,
            transport,
            loader,
        }
    }

    /// Wait for and handle the next message.
    pub async fn step(&mut self) {
        let message = self
            .coordinator
            .next_message()
            .await
            .expect("coordinator queue closed");
        self.coordinator.handle_message(message);
    }

    /// Drain all notifications emitted so far.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    /// Thread ids per column, in column order.
    pub fn membership(&self) -> Vec<Vec<String>> {
        self.coordinator
            .board()
            .columns()
            .columns()
            .iter()
            .map(|c| c.items().iter().map(|i| i.thread_id.clone()).collect())
            .collect()
    }
}

/// Completion payloads among `events`.
pub fn completions(events: &[BoardEvent]) -> Vec<RequestCompletion> {
    events
        .iter()
        .filter_map(|e| e.completion().copied())
        .collect()
}
