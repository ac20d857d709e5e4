//! Deck under construction.
//!
//! `Keep` files cards into the four deck groups and tracks how many copies
//! of each are kept. Amounts are clamped per group:
//!
//! - main groups: up to 4 copies
//! - white and others: 1 copy
//!
//! A decrement may take an amount to `-1`. That is a transient "discard"
//! marker: `trim` drops such entries, while entries that land on exactly 0
//! are demoted to `others` instead of being deleted.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::group::{DeckGroup, KeptCard};
use super::record::{Deck, DeckEntry, DeckMetadata, DEFAULT_DECK_NAME, UNSAVED_DECK_ID};
use crate::backend::Backend;
use crate::cards::Card;
use crate::core::{Observers, Result};

/// Lowest amount an entry can hold between interactions.
const TRANSIENT_FLOOR: i32 = -1;

/// Change notifications from `Keep`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeepEvent {
    /// Entries of a group were added, changed or removed.
    Changed(DeckGroup),
    /// `trim` ran.
    Trimmed { demoted: usize, dropped: usize },
    /// The backend accepted a save.
    Saved { deck_id: i64 },
}

/// Deck composition manager.
///
/// ## Usage
///
/// ```
/// use deck_keeper::cards::Card;
/// use deck_keeper::deck::{DeckGroup, Keep};
///
/// let mut keep = Keep::new();
/// let signi = Card::new("a", "WX-1", "アーク", "シグニ");
///
/// for _ in 0..5 {
///     keep.append(&signi);
/// }
/// assert_eq!(keep.amount("a", DeckGroup::MainNoLb), Some(4));
/// ```
#[derive(Debug)]
pub struct Keep {
    deck_id: i64,
    name: String,
    groups: [Vec<KeptCard>; 4],
    observers: Observers<KeepEvent>,
}

impl Default for Keep {
    fn default() -> Self {
        Self {
            deck_id: UNSAVED_DECK_ID,
            name: String::new(),
            groups: Default::default(),
            observers: Observers::new(),
        }
    }
}

impl Keep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deck_id(&self) -> i64 {
        self.deck_id
    }

    pub fn set_deck_id(&mut self, deck_id: i64) {
        self.deck_id = deck_id;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Observers notified after every change.
    pub fn observers_mut(&mut self) -> &mut Observers<KeepEvent> {
        &mut self.observers
    }

    /// Entries of one group, in insertion order.
    #[must_use]
    pub fn group(&self, group: DeckGroup) -> &[KeptCard] {
        &self.groups[group.index()]
    }

    /// Amount kept for a card in a group.
    #[must_use]
    pub fn amount(&self, pronounce: &str, group: DeckGroup) -> Option<i32> {
        self.find(pronounce, group).map(|k| k.amount)
    }

    /// Sum of positive amounts in a group.
    #[must_use]
    pub fn count(&self, group: DeckGroup) -> i32 {
        self.group(group).iter().map(|k| k.amount.max(0)).sum()
    }

    /// Cards in the main deck, with and without life burst.
    #[must_use]
    pub fn main_count(&self) -> i32 {
        self.count(DeckGroup::MainLb) + self.count(DeckGroup::MainNoLb)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Keep one more copy of a card in the group it classifies into.
    pub fn append(&mut self, card: &Card) -> DeckGroup {
        let group = DeckGroup::of(card);
        let max = group.max_amount();
        let entries = &mut self.groups[group.index()];

        match entries.iter_mut().find(|k| k.card.pronounce == card.pronounce) {
            Some(kept) => kept.amount = (kept.amount + 1).clamp(TRANSIENT_FLOOR, max),
            None => entries.push(KeptCard::new(card.clone(), 1)),
        }

        debug!(pronounce = %card.pronounce, %group, "kept card");
        self.observers.notify(&KeepEvent::Changed(group));
        group
    }

    /// Put a card into `others`.
    ///
    /// An existing entry is only clamped into `[0, 1]`, never incremented
    /// or pushed negative.
    pub fn append_to_others(&mut self, card: &Card) {
        self.insert_into_others(card);
        self.observers.notify(&KeepEvent::Changed(DeckGroup::Others));
    }

    /// Change an entry's amount by `delta`, clamped to `[-1, max]`.
    ///
    /// Returns `false` if the card is not in the group.
    pub fn increase(&mut self, pronounce: &str, group: DeckGroup, delta: i32) -> bool {
        let max = group.max_amount();
        let Some(kept) = self.groups[group.index()]
            .iter_mut()
            .find(|k| k.card.pronounce == pronounce)
        else {
            return false;
        };

        kept.amount = (kept.amount + delta).clamp(TRANSIENT_FLOOR, max);
        self.observers.notify(&KeepEvent::Changed(group));
        true
    }

    /// Delete every entry of a card from a group. Returns how many went.
    pub fn remove(&mut self, pronounce: &str, group: DeckGroup) -> usize {
        let entries = &mut self.groups[group.index()];
        let before = entries.len();
        entries.retain(|k| k.card.pronounce != pronounce);
        let removed = before - entries.len();

        if removed > 0 {
            self.observers.notify(&KeepEvent::Changed(group));
        }
        removed
    }

    /// Normalize every group.
    ///
    /// - amount `<= -1`: dropped
    /// - otherwise clamped into `[0, max]`
    /// - clamped to 0 outside `others`: moved to `others`
    /// - clamped to 0 inside `others`: dropped
    pub fn trim(&mut self) {
        let mut demoted: Vec<Card> = Vec::new();
        let mut dropped = 0;

        for group in DeckGroup::ALL {
            let max = group.max_amount();
            let entries = std::mem::take(&mut self.groups[group.index()]);
            let mut kept = Vec::with_capacity(entries.len());

            for mut entry in entries {
                if entry.amount <= TRANSIENT_FLOOR {
                    dropped += 1;
                    continue;
                }
                entry.amount = entry.amount.clamp(0, max);
                if entry.amount > 0 {
                    kept.push(entry);
                } else if group != DeckGroup::Others {
                    demoted.push(entry.card);
                } else {
                    dropped += 1;
                }
            }

            self.groups[group.index()] = kept;
        }

        for card in &demoted {
            self.insert_into_others(card);
        }

        debug!(demoted = demoted.len(), dropped, "trimmed deck");
        self.observers.notify(&KeepEvent::Trimmed {
            demoted: demoted.len(),
            dropped,
        });
    }

    /// Empty every group. Name and id are kept.
    pub fn clear(&mut self) {
        for group in DeckGroup::ALL {
            self.groups[group.index()].clear();
            self.observers.notify(&KeepEvent::Changed(group));
        }
    }

    /// Assemble a deck record from the current groups as they are.
    #[must_use]
    pub fn build_deck(&self, metadata: &DeckMetadata) -> Deck {
        self.build_deck_at(metadata, Utc::now())
    }

    /// `build_deck` with an explicit creation time.
    #[must_use]
    pub fn build_deck_at(&self, metadata: &DeckMetadata, created_at: DateTime<Utc>) -> Deck {
        let cards = DeckGroup::ALL
            .iter()
            .flat_map(|&group| {
                self.group(group).iter().map(move |k| DeckEntry {
                    pronounce: k.card.pronounce.clone(),
                    slug: k.card.slug.clone(),
                    group,
                    amount: k.amount,
                })
            })
            .collect();

        let name = if self.name.is_empty() {
            DEFAULT_DECK_NAME.to_string()
        } else {
            self.name.clone()
        };

        Deck {
            id: self.deck_id,
            name,
            source: metadata.source.clone(),
            is_deck: true,
            lrig: self.white_names(&["ルリグ", "センタールリグ"]),
            assists: self.white_names(&["アシストルリグ"]),
            is_public: metadata.is_public,
            ancestor: metadata.ancestor,
            owner: metadata.owner,
            format: metadata.format,
            tags: metadata.tags.clone(),
            description: metadata.description.clone(),
            created_at,
            cards,
        }
    }

    /// Trim, assemble and hand the deck to the backend.
    ///
    /// A failed save is returned as-is. Group state is not rolled back.
    pub async fn save_deck<B: Backend>(&mut self, backend: &B, metadata: &DeckMetadata) -> Result<Deck> {
        self.trim();
        let deck = self.build_deck(metadata);

        match backend.save_deck(&deck).await {
            Ok(()) => {
                info!(deck_id = deck.id, name = %deck.name, cards = deck.cards.len(), "deck saved");
                self.observers.notify(&KeepEvent::Saved { deck_id: deck.id });
                Ok(deck)
            }
            Err(err) => {
                warn!(deck_id = deck.id, error = %err, "deck save failed");
                Err(err)
            }
        }
    }

    fn find(&self, pronounce: &str, group: DeckGroup) -> Option<&KeptCard> {
        self.group(group).iter().find(|k| k.card.pronounce == pronounce)
    }

    fn insert_into_others(&mut self, card: &Card) {
        let entries = &mut self.groups[DeckGroup::Others.index()];
        match entries.iter_mut().find(|k| k.card.pronounce == card.pronounce) {
            Some(kept) => kept.amount = kept.amount.clamp(0, DeckGroup::Others.max_amount()),
            None => entries.push(KeptCard::new(card.clone(), 1)),
        }
    }

    fn white_names(&self, card_types: &[&str]) -> String {
        self.group(DeckGroup::White)
            .iter()
            .filter(|k| card_types.contains(&k.card.card_type.as_str()))
            .map(|k| k.card.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
