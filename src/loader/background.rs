//! Background loading with supersede-and-discard delivery.
//!
//! A load runs as one unit of work on its own worker thread. Delivery is
//! generation-gated: each started load takes the next generation number,
//! and only the load matching the latest generation may hand its result to
//! the listener. A superseded or cancelled load still runs to completion,
//! but its result goes to the loader's discard hook instead of the
//! listener, so the listener never observes a stale list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::cards::CardRecord;

use super::load::CardLoader;

/// Receives the finished card list of the latest load.
pub trait CardLoadListener: Send + 'static {
    /// Called once per delivered load with the final, filtered list.
    fn on_finish_card_loading(&self, cards: Vec<CardRecord>);
}

impl<F> CardLoadListener for F
where
    F: Fn(Vec<CardRecord>) + Send + 'static,
{
    fn on_finish_card_loading(&self, cards: Vec<CardRecord>) {
        self(cards)
    }
}

/// Runs loads on background workers, delivering at most one result at a
/// time and discarding superseded ones.
pub struct BackgroundLoader {
    latest: Arc<AtomicU64>,
    delivery: Arc<Mutex<()>>,
}

impl BackgroundLoader {
    /// Create a background loader with no loads in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            delivery: Arc::new(Mutex::new(())),
        }
    }

    /// Start a load on a new worker thread.
    ///
    /// Starting a new load supersedes any undelivered prior one: the prior
    /// result is routed to `CardLoader::on_discard_result` when it arrives.
    /// A `SourceError` inside the worker is logged and delivered as an
    /// empty list; no error crosses this boundary.
    pub fn start<L: CardLoadListener>(&self, loader: CardLoader, listener: L) -> LoadHandle {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let delivery = Arc::clone(&self.delivery);

        let worker = thread::spawn(move || {
            let cards = match loader.load() {
                Ok(cards) => cards,
                Err(err) => {
                    log::error!("background card load failed: {err}");
                    Vec::new()
                }
            };

            // One delivery at a time; the generation check under the lock
            // decides whether this result is still wanted.
            let _slot = delivery
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if latest.load(Ordering::SeqCst) == generation {
                listener.on_finish_card_loading(cards);
            } else {
                loader.on_discard_result(cards);
            }
        });

        LoadHandle {
            latest: Arc::clone(&self.latest),
            generation,
            worker: Some(worker),
        }
    }
}

impl Default for BackgroundLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Owning handle to one started load.
///
/// Dropping the handle detaches the worker: it runs to completion and its
/// result is delivered or discarded by the generation gate. The handle
/// never blocks unless `join` is called.
pub struct LoadHandle {
    latest: Arc<AtomicU64>,
    generation: u64,
    worker: Option<JoinHandle<()>>,
}

impl LoadHandle {
    /// Mark this load stale so its result is discarded on arrival.
    ///
    /// No-op if a newer load already superseded it. The worker itself is
    /// not interrupted.
    pub fn cancel(&self) {
        let _ = self.latest.compare_exchange(
            self.generation,
            self.generation + 1,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    /// Is this load still the latest one?
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    /// Wait for the worker to finish (delivery or discard included).
    pub fn join(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
