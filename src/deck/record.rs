//! Persistable deck record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::group::DeckGroup;
use crate::cards::Format;

/// Id of a deck that has never been saved.
pub const UNSAVED_DECK_ID: i64 = -1;

/// Name used when the deck has none.
pub const DEFAULT_DECK_NAME: &str = "NO NAME";

/// Caller-supplied metadata for a save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMetadata {
    pub owner: i64,
    pub format: Format,
    pub is_public: bool,
    pub tags: String,
    pub description: String,
    pub source: String,
    /// Deck this one was derived from.
    pub ancestor: Option<i64>,
}

impl Default for DeckMetadata {
    fn default() -> Self {
        Self {
            owner: -1,
            format: Format::DivaSelection,
            is_public: true,
            tags: String::new(),
            description: String::new(),
            source: String::new(),
            ancestor: None,
        }
    }
}

/// One line of a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub pronounce: String,
    pub slug: String,
    pub group: DeckGroup,
    pub amount: i32,
}

/// Deck as sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    pub source: String,
    pub is_deck: bool,
    /// Comma-separated lrig names.
    pub lrig: String,
    /// Comma-separated assist lrig names.
    pub assists: String,
    pub is_public: bool,
    pub ancestor: Option<i64>,
    pub owner: i64,
    pub format: Format,
    pub tags: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<DeckEntry>,
}

impl Deck {
    /// Entries of one group, in deck order.
    pub fn entries(&self, group: DeckGroup) -> impl Iterator<Item = &DeckEntry> {
        self.cards.iter().filter(move |e| e.group == group)
    }

    /// Sum of amounts in one group.
    #[must_use]
    pub fn count(&self, group: DeckGroup) -> i32 {
        self.entries(group).map(|e| e.amount).sum()
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_DECK_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pronounce: &str, group: DeckGroup, amount: i32) -> DeckEntry {
        DeckEntry {
            pronounce: pronounce.into(),
            slug: format!("WX-{pronounce}"),
            group,
            amount,
        }
    }

    #[test]
    fn test_metadata_defaults_from_json() {
        let meta: DeckMetadata = serde_json::from_str(r#"{"tags": "赤"}"#).unwrap();
        assert_eq!(meta.owner, -1);
        assert_eq!(meta.format, Format::DivaSelection);
        assert!(meta.is_public);
        assert_eq!(meta.tags, "赤");
    }

    #[test]
    fn test_group_counts() {
        let deck = Deck {
            id: 7,
            name: DEFAULT_DECK_NAME.into(),
            source: String::new(),
            is_deck: true,
            lrig: String::new(),
            assists: String::new(),
            is_public: true,
            ancestor: None,
            owner: 1,
            format: Format::AllStar,
            tags: String::new(),
            description: String::new(),
            created_at: Utc::now(),
            cards: vec![
                entry("a", DeckGroup::MainLb, 4),
                entry("b", DeckGroup::MainLb, 2),
                entry("c", DeckGroup::White, 1),
            ],
        };

        assert_eq!(deck.count(DeckGroup::MainLb), 6);
        assert_eq!(deck.entries(DeckGroup::White).count(), 1);
        assert_eq!(deck.count(DeckGroup::Others), 0);
        assert!(deck.is_saved());
    }
}
