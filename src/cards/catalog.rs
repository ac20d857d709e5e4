//! Card catalog.
//!
//! The `Catalog` holds every card loaded for a session, in backend order.
//! Order is preserved so paging is stable. Lookup by pronounce or slug is
//! O(1) through side indexes.
//!
//! Cards live in an `im::Vector`, so `snapshot()` is an O(1) clone that can
//! be handed to a filter worker without sharing mutable memory.

use im::Vector;
use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::{Error, Result};

/// Ordered card catalog.
///
/// ## Example
///
/// ```
/// use deck_keeper::cards::{Card, Catalog};
///
/// let catalog = Catalog::from_cards(vec![
///     Card::new("タマ", "WX01-001", "タマ", "ルリグ"),
///     Card::new("ピルルク", "WX01-002", "ピルルク", "ルリグ"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.by_slug("WX01-002").unwrap().name, "ピルルク");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vector<Card>,
    by_pronounce: FxHashMap<String, usize>,
    by_slug: FxHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate pronounce keys.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.push(card)?;
        }
        Ok(catalog)
    }

    /// Append a card at the end.
    ///
    /// Fails if a card with the same pronounce is already present.
    pub fn push(&mut self, card: Card) -> Result<()> {
        if self.by_pronounce.contains_key(&card.pronounce) {
            return Err(Error::DuplicatePronounce(card.pronounce));
        }
        let index = self.cards.len();
        self.by_pronounce.insert(card.pronounce.clone(), index);
        self.by_slug.entry(card.slug.clone()).or_insert(index);
        self.cards.push_back(card);
        Ok(())
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a card by its pronounce key.
    #[must_use]
    pub fn by_pronounce(&self, pronounce: &str) -> Option<&Card> {
        self.by_pronounce.get(pronounce).and_then(|&i| self.cards.get(i))
    }

    /// Get a card by its slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Card> {
        self.by_slug.get(slug).and_then(|&i| self.cards.get(i))
    }

    /// Look up by slug first, then by pronounce.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Card> {
        self.by_slug(key).or_else(|| self.by_pronounce(key))
    }

    /// Check if a pronounce key is present.
    #[must_use]
    pub fn contains(&self, pronounce: &str) -> bool {
        self.by_pronounce.contains_key(pronounce)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// O(1) copy of the card sequence.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }
}
