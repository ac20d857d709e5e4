//! Backend boundary trait.
//!
//! Transport and authentication live outside this crate. Hosts implement
//! `Backend` over whatever request layer they use; the stores only see
//! resolved results.
//!
//! ## Implementation Notes
//!
//! - `load_catalog`: the full ordered card list, no pagination
//! - `card_detail`: `Ok(None)` for "not found", which is an expected outcome
//! - `save_deck`: success or failure only; failures are surfaced, never retried

use crate::cards::{Card, Format};
use crate::core::Result;
use crate::deck::Deck;

/// Request/response boundary consumed by the stores.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Fetch every card legal in `format`, in catalog order.
    async fn load_catalog(&self, format: Format) -> Result<Vec<Card>>;

    /// Fetch one card by slug or pronounce.
    async fn card_detail(&self, key: &str) -> Result<Option<Card>>;

    /// Persist a deck.
    async fn save_deck(&self, deck: &Deck) -> Result<()>;
}
