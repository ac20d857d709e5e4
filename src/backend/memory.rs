//! In-process backend.
//!
//! Serves a fixed card list and records saved decks. Useful for demos,
//! offline sessions and tests. Request counters show how many round trips
//! the stores actually made.

use std::cell::{Cell, RefCell};

use crate::cards::{Card, Format};
use crate::core::{Error, Result};
use crate::deck::Deck;

use super::boundary::Backend;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    cards: Vec<Card>,
    saved: RefCell<Vec<Deck>>,
    reject_saves: Cell<bool>,
    offline: Cell<bool>,
    catalog_requests: Cell<usize>,
    detail_requests: Cell<usize>,
    save_requests: Cell<usize>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    /// Make subsequent saves fail with `Error::SaveRejected`.
    pub fn set_reject_saves(&self, reject: bool) {
        self.reject_saves.set(reject);
    }

    /// Make every request fail with `Error::Backend`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Decks saved so far.
    #[must_use]
    pub fn saved_decks(&self) -> Vec<Deck> {
        self.saved.borrow().clone()
    }

    #[must_use]
    pub fn catalog_requests(&self) -> usize {
        self.catalog_requests.get()
    }

    #[must_use]
    pub fn detail_requests(&self) -> usize {
        self.detail_requests.get()
    }

    #[must_use]
    pub fn save_requests(&self) -> usize {
        self.save_requests.get()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.get() {
            Err(Error::Backend("backend offline".into()))
        } else {
            Ok(())
        }
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl Backend for InMemoryBackend {
    async fn load_catalog(&self, format: Format) -> Result<Vec<Card>> {
        bump(&self.catalog_requests);
        self.check_online()?;
        Ok(self
            .cards
            .iter()
            .filter(|c| format.admits(c.format))
            .cloned()
            .collect())
    }

    async fn card_detail(&self, key: &str) -> Result<Option<Card>> {
        bump(&self.detail_requests);
        self.check_online()?;
        Ok(self
            .cards
            .iter()
            .find(|c| c.slug == key || c.pronounce == key)
            .cloned())
    }

    async fn save_deck(&self, deck: &Deck) -> Result<()> {
        bump(&self.save_requests);
        self.check_online()?;
        if self.reject_saves.get() {
            return Err(Error::SaveRejected);
        }
        self.saved.borrow_mut().push(deck.clone());
        Ok(())
    }
}
