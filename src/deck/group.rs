//! Deck slot groups and card classification.
//!
//! Every kept card sits in exactly one of four groups, decided by its
//! category label and life burst flag. Membership is always recomputed from
//! the card, never stored separately.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Category labels that go into the main deck.
pub const MAIN_DECK_TYPES: [&str; 2] = ["シグニ", "スペル"];

/// Category labels that go into the lrig (white) deck.
pub const WHITE_DECK_TYPES: [&str; 6] = [
    "ルリグ",
    "センタールリグ",
    "アシストルリグ",
    "レゾナ",
    "ピース",
    "キー",
];

/// Deck slot group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckGroup {
    /// Main deck, with life burst.
    MainLb,
    /// Main deck, without life burst.
    MainNoLb,
    /// Lrig deck.
    White,
    /// Everything else, including cards demoted by trimming.
    Others,
}

impl DeckGroup {
    /// All groups in display order.
    pub const ALL: [DeckGroup; 4] = [
        DeckGroup::MainLb,
        DeckGroup::MainNoLb,
        DeckGroup::White,
        DeckGroup::Others,
    ];

    /// Classify a card.
    ///
    /// ```
    /// use deck_keeper::cards::Card;
    /// use deck_keeper::deck::DeckGroup;
    ///
    /// let signi = Card::new("a", "a", "a", "シグニ").with_life_burst("LB");
    /// assert_eq!(DeckGroup::of(&signi), DeckGroup::MainLb);
    ///
    /// let piece = Card::new("b", "b", "b", "ピース");
    /// assert_eq!(DeckGroup::of(&piece), DeckGroup::White);
    /// ```
    #[must_use]
    pub fn of(card: &Card) -> Self {
        let card_type = card.card_type.as_str();
        if MAIN_DECK_TYPES.contains(&card_type) {
            if card.has_lb {
                DeckGroup::MainLb
            } else {
                DeckGroup::MainNoLb
            }
        } else if WHITE_DECK_TYPES.contains(&card_type) {
            DeckGroup::White
        } else {
            DeckGroup::Others
        }
    }

    /// Copies of one card allowed in this group.
    #[must_use]
    pub const fn max_amount(self) -> i32 {
        match self {
            DeckGroup::MainLb | DeckGroup::MainNoLb => 4,
            DeckGroup::White | DeckGroup::Others => 1,
        }
    }

    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, DeckGroup::MainLb | DeckGroup::MainNoLb)
    }

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DeckGroup::MainLb => 0,
            DeckGroup::MainNoLb => 1,
            DeckGroup::White => 2,
            DeckGroup::Others => 3,
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckGroup::MainLb => "main_lb",
            DeckGroup::MainNoLb => "main_no_lb",
            DeckGroup::White => "white",
            DeckGroup::Others => "others",
        }
    }
}

impl std::fmt::Display for DeckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card in the deck under construction.
///
/// `amount` may sit at `-1` between a decrement and the next trim; trimming
/// drops such entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptCard {
    pub card: Card,
    pub amount: i32,
}

impl KeptCard {
    #[must_use]
    pub fn new(card: Card, amount: i32) -> Self {
        Self { card, amount }
    }

    #[must_use]
    pub fn pronounce(&self) -> &str {
        &self.card.pronounce
    }

    /// Group the card classifies into.
    #[must_use]
    pub fn group(&self) -> DeckGroup {
        DeckGroup::of(&self.card)
    }
}
