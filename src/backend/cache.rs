//! Card detail cache.
//!
//! Detail views look cards up by slug; decks and the catalog key on
//! pronounce. The cache stores each card once under its slug and keeps a
//! pronounce alias, so either key hits.
//!
//! The whole cache can be exported as a `bincode` snapshot and restored
//! later for offline lookups.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCache {
    by_slug: FxHashMap<String, Card>,
    /// pronounce -> slug
    aliases: FxHashMap<String, String>,
}

impl DetailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up by slug, then by pronounce.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Card> {
        self.by_slug.get(key).or_else(|| {
            self.aliases
                .get(key)
                .and_then(|slug| self.by_slug.get(slug))
        })
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Store a card, replacing any earlier copy with the same slug.
    pub fn insert(&mut self, card: Card) {
        self.aliases.insert(card.pronounce.clone(), card.slug.clone());
        self.by_slug.insert(card.slug.clone(), card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_slug.clear();
        self.aliases.clear();
    }

    /// Serialize the cache.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a cache from `to_snapshot` output.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
