//! Background facet filtering.
//!
//! Large catalogs can be filtered off the interaction thread. The worker
//! owns its own catalog snapshot and facet state; the only contact with the
//! browser is two channels:
//!
//! - outbound `WorkerMessage`s (fire-and-forget)
//! - inbound `WorkerDelivery`s, each a full replacement card list
//!
//! There is no cancellation. Deliveries are consumed in arrival order and
//! the most recent one wins, even if a newer query is still in flight.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::facets::{FacetFilter, LifeBurstFilter};
use crate::cards::{Card, Format};
use crate::core::{Error, Result};

/// Query update sent to the worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WorkerMessage {
    #[serde(rename = "initialize-cards")]
    InitializeCards { cards: Vector<Card>, format: Format },
    #[serde(rename = "filter_word")]
    FilterWord(String),
    #[serde(rename = "color")]
    Color(String),
    #[serde(rename = "card_type")]
    CardType(String),
    #[serde(rename = "format")]
    Format(Format),
    #[serde(rename = "has_lb")]
    HasLb(LifeBurstFilter),
}

impl WorkerMessage {
    /// Wire tag of the message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerMessage::InitializeCards { .. } => "initialize-cards",
            WorkerMessage::FilterWord(_) => "filter_word",
            WorkerMessage::Color(_) => "color",
            WorkerMessage::CardType(_) => "card_type",
            WorkerMessage::Format(_) => "format",
            WorkerMessage::HasLb(_) => "has_lb",
        }
    }
}

/// Recomputed card list.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerDelivery {
    /// Sequence number of the message that produced this list.
    pub seq: u64,
    pub cards: Vector<Card>,
}

/// Worker-side state: the card snapshot and current facets.
///
/// Kept separate from the thread so it can be driven synchronously.
#[derive(Clone, Debug, Default)]
pub struct FacetState {
    cards: Option<Vector<Card>>,
    facets: FacetFilter,
}

impl FacetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn facets(&self) -> &FacetFilter {
        &self.facets
    }

    /// Apply one message and return the recomputed list.
    ///
    /// Returns `None` until cards have been initialized.
    pub fn apply(&mut self, message: WorkerMessage) -> Option<Vector<Card>> {
        match message {
            WorkerMessage::InitializeCards { cards, format } => {
                self.cards = Some(cards);
                self.facets.format = format;
            }
            WorkerMessage::FilterWord(word) => self.facets.filter_word = word,
            WorkerMessage::Color(color) => self.facets.color = color,
            WorkerMessage::CardType(card_type) => self.facets.card_type = card_type,
            WorkerMessage::Format(format) => self.facets.format = format,
            WorkerMessage::HasLb(has_lb) => self.facets.has_lb = has_lb,
        }
        self.recompute()
    }

    /// Filter the snapshot by the current facets.
    #[must_use]
    pub fn recompute(&self) -> Option<Vector<Card>> {
        let cards = self.cards.as_ref()?;
        if self.facets.is_open() {
            return Some(cards.clone());
        }
        Some(cards.iter().filter(|c| self.facets.matches(c)).cloned().collect())
    }
}

/// Handle to a filter worker thread.
///
/// Dropping the handle closes the outbound channel and joins the thread.
#[derive(Debug)]
pub struct FilterWorker {
    outbound: Option<Sender<(u64, WorkerMessage)>>,
    inbound: Receiver<WorkerDelivery>,
    handle: Option<JoinHandle<()>>,
    next_seq: u64,
}

impl FilterWorker {
    /// Start a worker thread.
    pub fn spawn() -> Result<Self> {
        let (outbound, worker_rx) = channel::<(u64, WorkerMessage)>();
        let (worker_tx, inbound) = channel::<WorkerDelivery>();

        let handle = thread::Builder::new()
            .name("filter-worker".into())
            .spawn(move || run(worker_rx, worker_tx))?;

        Ok(Self {
            outbound: Some(outbound),
            inbound,
            handle: Some(handle),
            next_seq: 0,
        })
    }

    /// Send a message. Returns its sequence number.
    ///
    /// A dead worker is logged and otherwise ignored.
    pub fn post(&mut self, message: WorkerMessage) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let kind = message.kind();
        let sent = match &self.outbound {
            Some(tx) => tx.send((seq, message)).is_ok(),
            None => false,
        };
        if sent {
            debug!(seq, kind, "posted filter worker message");
        } else {
            warn!(seq, kind, "filter worker is gone, message dropped");
        }
        seq
    }

    /// Drain every delivery received so far, in arrival order.
    pub fn drain(&self) -> Vec<WorkerDelivery> {
        let mut out = Vec::new();
        loop {
            match self.inbound.try_recv() {
                Ok(delivery) => out.push(delivery),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    /// Latest delivery received so far, discarding older ones.
    pub fn latest(&self) -> Option<WorkerDelivery> {
        self.drain().pop()
    }

    /// Block until the next delivery.
    pub fn recv(&self) -> Result<WorkerDelivery> {
        self.inbound.recv().map_err(|_| Error::WorkerDisconnected)
    }

    /// Wait up to `timeout` for the next delivery.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerDelivery>> {
        match self.inbound.recv_timeout(timeout) {
            Ok(delivery) => Ok(Some(delivery)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerDisconnected),
        }
    }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.outbound.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("filter worker panicked");
            }
        }
    }
}

impl Drop for FilterWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(rx: Receiver<(u64, WorkerMessage)>, tx: Sender<WorkerDelivery>) {
    let mut state = FacetState::new();
    for (seq, message) in rx {
        let Some(cards) = state.apply(message) else {
            continue;
        };
        debug!(seq, count = cards.len(), "filter worker recomputed");
        if tx.send(WorkerDelivery { seq, cards }).is_err() {
            break;
        }
    }
}
