//! Catalog card records.
//!
//! A `Card` is immutable once loaded. `pronounce` is its identity: the
//! catalog index, the detail cache and deck deduplication all key on it.
//! `slug` is the routing identifier used by detail views.

use serde::{Deserialize, Serialize};

use super::format::Format;

/// Story marker printed on a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Story {
    #[default]
    #[serde(rename = "")]
    Normal,
    #[serde(rename = "d")]
    Dissona,
}

/// A catalog card.
///
/// ## Example
///
/// ```
/// use deck_keeper::cards::Card;
///
/// let card = Card::new("コードアンチ・ドロンジョ", "WX24-P1-050", "コードアンチ ドロンジョ", "シグニ")
///     .with_features(0b0110, 0b1)
///     .with_life_burst("カードを１枚引く。");
///
/// assert!(card.has_lb);
/// assert_eq!(card.feature_bits1, 0b0110);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub slug: String,
    pub name: String,
    pub pronounce: String,
    pub img: String,

    /// Category label as printed ("シグニ", "スペル", "ルリグ", ...).
    pub card_type: String,

    pub lrig: String,
    pub level: String,
    pub color: String,
    pub klass: Vec<String>,
    pub cost: Vec<String>,
    pub limit: String,
    pub power: String,
    pub team: Vec<String>,
    pub team_piece: bool,
    pub timing: Vec<String>,
    pub rarity: String,

    /// Life burst flag. Decides between the two main deck groups.
    pub has_lb: bool,
    pub lb_text: String,

    pub skills: String,
    pub story: Story,
    pub format: Format,
    pub coin: String,

    /// First feature family.
    pub feature_bits1: u64,
    /// Second feature family.
    pub feature_bits2: u64,
}

impl Card {
    /// Create a card with its identity and category. Everything else is empty.
    #[must_use]
    pub fn new(
        pronounce: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        card_type: impl Into<String>,
    ) -> Self {
        Self {
            pronounce: pronounce.into(),
            slug: slug.into(),
            name: name.into(),
            card_type: card_type.into(),
            ..Self::default()
        }
    }

    /// Set both feature masks (builder pattern).
    #[must_use]
    pub fn with_features(mut self, bits1: u64, bits2: u64) -> Self {
        self.feature_bits1 = bits1;
        self.feature_bits2 = bits2;
        self
    }

    /// Mark the card as having a life burst with the given text.
    #[must_use]
    pub fn with_life_burst(mut self, text: impl Into<String>) -> Self {
        self.has_lb = true;
        self.lb_text = text.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    #[must_use]
    pub fn with_lrig(mut self, lrig: impl Into<String>) -> Self {
        self.lrig = lrig.into();
        self
    }

    /// Check whether the card carries every bit of `mask` in family 1.
    #[must_use]
    pub fn has_all_bits1(&self, mask: u64) -> bool {
        self.feature_bits1 & mask == mask
    }

    /// Check whether the card carries every bit of `mask` in family 2.
    #[must_use]
    pub fn has_all_bits2(&self, mask: u64) -> bool {
        self.feature_bits2 & mask == mask
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.slug)
    }
}
