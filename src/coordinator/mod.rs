//! Load coordination: page fetches, parallel image loads and placement.
//!
//! Every unit of work (one page fetch or one image load) runs as a spawned
//! task and reports exactly one terminal outcome as a [`LoadMessage`] on the
//! coordinator's queue. The coordinator owns all mutable state (counter,
//! cursor, board) and applies those messages one at a time in
//! [`LoadCoordinator::handle_message`], so outcomes may arrive in any order
//! without any locking.
//!
//! # Example
//!
//! ```ignore
//! let (mut coordinator, mut events) = LoadCoordinator::new(
//!     BoardConfig::from_env()?,
//!     ReqwestTransport::new(),
//!     ReqwestImageLoader::new(),
//!     HeadlessItemFactory::default(),
//!     vec!["pics".to_string()],
//! );
//! coordinator.apply_width(1280);
//! coordinator.load_more();
//! coordinator.run_until_settled().await;
//! ```

pub mod counter;
pub mod debounce;
pub mod events;
pub mod messages;

pub use counter::{RequestCounter, UnitId, UnitKind, UnitOutcome};
pub use debounce::Debouncer;
pub use events::{BoardEvent, RequestCompletion};
pub use messages::LoadMessage;

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::config::BoardConfig;
use crate::error::{BoardError, ImageLoadError, TransportError};
use crate::feed::{classify_url, is_placeholder, FeedCursor, FeedPage, ImageSource, Thread};
use crate::layout::{Board, LayoutChange};
use crate::traits::{FeedTransport, ImageLoader, ItemFactory, LoadedImage};

/// Orchestrates feed pagination, image loading and placement.
pub struct LoadCoordinator<T, L, F>
where
    F: ItemFactory,
{
    config: BoardConfig,
    transport: Arc<T>,
    loader: Arc<L>,
    factory: F,
    cursor: FeedCursor,
    board: Board<F::Item>,
    counter: RequestCounter,
    /// Cancel signals for in-flight page fetches
    cancels: HashMap<UnitId, oneshot::Sender<()>>,
    message_tx: mpsc::UnboundedSender<LoadMessage>,
    message_rx: mpsc::UnboundedReceiver<LoadMessage>,
    event_tx: mpsc::UnboundedSender<BoardEvent>,
    resize: Debouncer,
}

impl<T, L, F> LoadCoordinator<T, L, F>
where
    T: FeedTransport + 'static,
    L: ImageLoader + 'static,
    F: ItemFactory,
{
    /// Create a coordinator for `channels` (empty means the configured
    /// defaults) and the receiver for its notifications.
    pub fn new(
        config: BoardConfig,
        transport: T,
        loader: L,
        factory: F,
        channels: Vec<String>,
    ) -> (Self, mpsc::UnboundedReceiver<BoardEvent>) {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let coordinator = Self {
            cursor: FeedCursor::new(&config, channels),
            board: Board::new(&config),
            resize: Debouncer::new(config.resize_debounce),
            counter: RequestCounter::new(),
            cancels: HashMap::new(),
            transport: Arc::new(transport),
            loader: Arc::new(loader),
            factory,
            message_tx,
            message_rx,
            event_tx,
            config,
        };
        (coordinator, event_rx)
    }

    pub fn board(&self) -> &Board<F::Item> {
        &self.board
    }

    pub fn cursor(&self) -> &FeedCursor {
        &self.cursor
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of dispatched units that have not reached a terminal state.
    pub fn running_requests(&self) -> usize {
        self.counter.running()
    }

    /// Whether all dispatched work has settled.
    pub fn is_settled(&self) -> bool {
        self.counter.is_settled()
    }

    /// Switch to another channel set, restarting pagination.
    pub fn set_channels(&mut self, channels: Vec<String>) {
        self.cursor.set_channels(channels);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Apply `available_width` immediately (initial layout).
    pub fn apply_width(&mut self, available_width: u32) -> LayoutChange {
        self.board.apply_width(available_width)
    }

    /// Debounced resize: the layout is recomputed once the debounce window
    /// passes without another resize.
    pub fn resize(&mut self, available_width: u32) {
        self.resize.schedule(
            self.message_tx.clone(),
            LoadMessage::Relayout { available_width },
        );
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Fetch the next page of the feed. Returns the fetch's unit id, which
    /// can be passed to [`LoadCoordinator::cancel_fetch`].
    pub fn load_more(&mut self) -> UnitId {
        self.emit(BoardEvent::AboutToLoadMore);

        let url = self.cursor.next_url();
        let unit = self.counter.dispatch(UnitKind::PageFetch);
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        self.cancels.insert(unit, cancel_tx);

        info!(
            "Fetching page {} ({} running): {}",
            unit,
            self.counter.running(),
            url
        );

        let transport = Arc::clone(&self.transport);
        let message_tx = self.message_tx.clone();
        let timeout = self.config.fetch_timeout;

        tokio::spawn(async move {
            let work = async {
                let fetch = tokio::time::timeout(timeout, transport.fetch(&url, timeout));
                tokio::select! {
                    result = fetch => match result {
                        Ok(result) => result,
                        Err(_) => Err(TransportError::Timeout(timeout)),
                    },
                    _ = cancel_rx => Err(TransportError::Cancelled),
                }
            };
            // A panicking transport must still settle its unit.
            let result = AssertUnwindSafe(work)
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| Err(TransportError::Aborted(panic_message(payload))));
            let _ = message_tx.send(LoadMessage::PageSettled { unit, result });
        });

        unit
    }

    fn dispatch_image(&mut self, thread: Thread) -> UnitId {
        let source = classify_url(&thread.url);
        let unit = self.counter.dispatch(UnitKind::ImageLoad);
        debug!("Loading image {} for thread {}: {}", unit, thread.id, source.load_url);

        let loader = Arc::clone(&self.loader);
        let message_tx = self.message_tx.clone();
        let timeout = self.config.image_timeout;

        tokio::spawn(async move {
            let url = source.load_url.clone();
            let work = async {
                match tokio::time::timeout(timeout, loader.load(&url)).await {
                    Ok(result) => result,
                    Err(_) => Err(ImageLoadError::Timeout {
                        url: url.clone(),
                        after: timeout,
                    }),
                }
            };
            let result = AssertUnwindSafe(work)
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(ImageLoadError::Aborted {
                        url: url.clone(),
                        message: panic_message(payload),
                    })
                });
            let _ = message_tx.send(LoadMessage::ImageSettled {
                unit,
                thread,
                source,
                result,
            });
        });

        unit
    }

    /// Cancel an in-flight page fetch. The fetch still settles through the
    /// queue, as `Cancelled`. Returns false if the fetch already settled.
    pub fn cancel_fetch(&mut self, unit: UnitId) -> bool {
        match self.cancels.remove(&unit) {
            Some(cancel) => {
                info!("Cancelling page fetch {}", unit);
                cancel.send(()).is_ok()
            }
            None => false,
        }
    }

    /// Cancel every in-flight page fetch.
    pub fn cancel_all(&mut self) {
        let units: Vec<UnitId> = self.cancels.keys().copied().collect();
        for unit in units {
            self.cancel_fetch(unit);
        }
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Wait for the next message from spawned work.
    pub async fn next_message(&mut self) -> Option<LoadMessage> {
        self.message_rx.recv().await
    }

    /// Handle every message already queued without waiting. Returns how many
    /// were handled.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    /// Handle messages until no work is outstanding.
    pub async fn run_until_settled(&mut self) {
        while !self.counter.is_settled() {
            match self.message_rx.recv().await {
                Some(message) => self.handle_message(message),
                None => break,
            }
        }
    }

    /// Apply one message to the coordinator's state.
    ///
    /// A message for a unit that is not outstanding (already settled) is
    /// ignored, so each unit is reconciled exactly once.
    pub fn handle_message(&mut self, message: LoadMessage) {
        if let Some(unit) = message.unit() {
            if !self.counter.is_outstanding(unit) {
                warn!("Ignoring outcome for unit {} which already settled", unit);
                return;
            }
        }

        match message {
            LoadMessage::PageSettled { unit, result } => self.on_page_settled(unit, result),
            LoadMessage::ImageSettled {
                unit,
                thread,
                source,
                result,
            } => self.on_image_settled(unit, thread, source, result),
            LoadMessage::Relayout { available_width } => {
                let change = self.board.apply_width(available_width);
                if !change.is_unchanged() {
                    info!(
                        "Relayout at {}px: {} columns of {}px",
                        available_width, change.plan.column_count, change.plan.column_width
                    );
                    self.emit(BoardEvent::LayoutChanged(change));
                }
            }
        }
    }

    fn on_page_settled(&mut self, unit: UnitId, result: Result<FeedPage, TransportError>) {
        self.cancels.remove(&unit);

        match result {
            Ok(page) => {
                info!(
                    "Page {} returned {} threads, next token {:?}",
                    unit,
                    page.threads.len(),
                    page.next_token
                );
                for thread in page.threads {
                    self.dispatch_image(thread);
                }
                self.cursor.advance(page.next_token);
                self.complete(unit, UnitOutcome::Succeeded, None);
            }
            Err(err @ TransportError::Timeout(_)) => {
                warn!("Page {} timed out: {}", unit, err);
                self.complete(unit, UnitOutcome::TimedOut, None);
                self.emit(BoardEvent::ConnectivityAlert {
                    message: err.user_message(),
                });
            }
            Err(TransportError::Cancelled) => {
                debug!("Page {} cancelled", unit);
                self.complete(unit, UnitOutcome::Cancelled, None);
            }
            Err(err) => {
                let category = BoardError::from(err.clone()).category();
                warn!("Page {} failed ({}): {}", unit, category, err);
                self.complete(unit, UnitOutcome::Failed, None);
            }
        }
    }

    fn on_image_settled(
        &mut self,
        unit: UnitId,
        thread: Thread,
        source: ImageSource,
        result: Result<LoadedImage, ImageLoadError>,
    ) {
        let result = result.and_then(|image| {
            if is_placeholder(&image) {
                Err(ImageLoadError::Placeholder {
                    url: image.source_url,
                    width: image.width,
                    height: image.height,
                })
            } else {
                Ok(image)
            }
        });

        match result {
            Ok(image) => {
                let item = self
                    .factory
                    .materialize(&thread, &image, source.fullsize_url.as_deref());
                let column = self.board.accept(item);
                debug!(
                    "Accepted thread {} ({}x{}) into column {:?}",
                    thread.id, image.width, image.height, column
                );
                self.complete(unit, UnitOutcome::Succeeded, Some(true));
            }
            Err(err) => {
                let category = BoardError::from(err.clone()).category();
                debug!("Rejected thread {} ({}): {}", thread.id, category, err);
                let outcome = match err {
                    ImageLoadError::Timeout { .. } => UnitOutcome::TimedOut,
                    _ => UnitOutcome::Failed,
                };
                self.complete(unit, outcome, Some(false));
            }
        }
    }

    fn complete(&mut self, unit: UnitId, outcome: UnitOutcome, accepted_image: Option<bool>) {
        let Some(kind) = self.counter.settle(unit) else {
            return;
        };
        self.emit(BoardEvent::RequestCompleted(RequestCompletion {
            unit,
            kind,
            outcome,
            running_requests: self.counter.running(),
            accepted_image,
        }));
    }

    fn emit(&self, event: BoardEvent) {
        // A dropped receiver only means nobody is listening.
        let _ = self.event_tx.send(event);
    }
}

/// Text of a caught panic payload.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    }
}
