//! Text and attribute facets applied by the filter worker.
//!
//! Facets narrow the card list before the feature query runs on the
//! browser side. Empty string facets place no constraint.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Format};

/// Life burst facet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LifeBurstFilter {
    #[default]
    Any,
    Without,
    With,
}

impl LifeBurstFilter {
    #[must_use]
    pub fn matches(self, has_lb: bool) -> bool {
        match self {
            LifeBurstFilter::Any => true,
            LifeBurstFilter::Without => !has_lb,
            LifeBurstFilter::With => has_lb,
        }
    }
}

impl TryFrom<u8> for LifeBurstFilter {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LifeBurstFilter::Any),
            1 => Ok(LifeBurstFilter::Without),
            2 => Ok(LifeBurstFilter::With),
            other => Err(format!("invalid life burst filter: {other}")),
        }
    }
}

impl From<LifeBurstFilter> for u8 {
    fn from(value: LifeBurstFilter) -> Self {
        match value {
            LifeBurstFilter::Any => 0,
            LifeBurstFilter::Without => 1,
            LifeBurstFilter::With => 2,
        }
    }
}

/// Facet state mirrored between the browser and its worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFilter {
    pub filter_word: String,
    pub color: String,
    pub card_type: String,
    pub format: Format,
    pub has_lb: LifeBurstFilter,
}

impl Default for FacetFilter {
    fn default() -> Self {
        Self {
            filter_word: String::new(),
            color: String::new(),
            card_type: String::new(),
            format: Format::AllStar,
            has_lb: LifeBurstFilter::Any,
        }
    }
}

impl FacetFilter {
    /// Check a card against every facet.
    ///
    /// Each whitespace-separated term of `filter_word` must occur in the
    /// card's name, pronounce or skill text.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        let words_match = self.filter_word.split_whitespace().all(|term| {
            card.name.contains(term) || card.pronounce.contains(term) || card.skills.contains(term)
        });

        words_match
            && (self.color.is_empty() || card.color.contains(self.color.as_str()))
            && (self.card_type.is_empty() || card.card_type == self.card_type)
            && self.format.admits(card.format)
            && self.has_lb.matches(card.has_lb)
    }

    /// Check if no facet narrows the list.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.filter_word.trim().is_empty()
            && self.color.is_empty()
            && self.card_type.is_empty()
            && self.format == Format::AllStar
            && self.has_lb == LifeBurstFilter::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signi(name: &str) -> Card {
        Card::new(name, name, name, "シグニ").with_color("red")
    }

    #[test]
    fn test_default_is_open() {
        let facets = FacetFilter::default();
        assert!(facets.is_open());
        assert!(facets.matches(&signi("a")));
    }

    #[test]
    fn test_filter_word_terms_all_required() {
        let card = signi("羅星 ゾディアック").with_skills("カードを１枚引く");
        let mut facets = FacetFilter::default();

        facets.filter_word = "羅星 引く".into();
        assert!(facets.matches(&card));

        facets.filter_word = "羅星 バニッシュ".into();
        assert!(!facets.matches(&card));
    }

    #[test]
    fn test_color_and_type() {
        let card = signi("a");
        let mut facets = FacetFilter::default();

        facets.color = "red".into();
        assert!(facets.matches(&card));
        facets.color = "blue".into();
        assert!(!facets.matches(&card));

        facets.color.clear();
        facets.card_type = "スペル".into();
        assert!(!facets.matches(&card));
    }

    #[test]
    fn test_format_admission() {
        let key_card = signi("a").with_format(Format::KeySelection);
        let mut facets = FacetFilter::default();

        facets.format = Format::KeySelection;
        assert!(facets.matches(&key_card));
        facets.format = Format::DivaSelection;
        assert!(!facets.matches(&key_card));
    }

    #[test]
    fn test_life_burst_tri_state() {
        let with = signi("a").with_life_burst("LB");
        let without = signi("b");
        let mut facets = FacetFilter::default();

        facets.has_lb = LifeBurstFilter::With;
        assert!(facets.matches(&with));
        assert!(!facets.matches(&without));

        facets.has_lb = LifeBurstFilter::Without;
        assert!(!facets.matches(&with));
        assert!(facets.matches(&without));
    }

    #[test]
    fn test_life_burst_wire_values() {
        assert_eq!(serde_json::to_string(&LifeBurstFilter::With).unwrap(), "2");
        assert!(serde_json::from_str::<LifeBurstFilter>("3").is_err());
    }
}
