//! Feature bitmask query over the catalog.
//!
//! A `FeatureQuery` is a pair of masks. Matching is tri-state per mask:
//!
//! | bits1      | bits2      | card matches when                                   |
//! |------------|------------|-----------------------------------------------------|
//! | 0          | 0          | always                                              |
//! | any        | 0 or 1     | `feature_bits1 & bits1 != 0` (any requested tag)    |
//! | 0 or 1     | any        | `feature_bits2 & bits2 != 0` (any requested tag)    |
//! | other      | other      | both masks fully contained (all requested tags)     |
//!
//! Rows are checked top to bottom. Single-family browsing is permissive;
//! intersecting two families is strict. `1` is the "nothing from this
//! family" value produced by feature encoding (see `Feature::to_bits`).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::feature::Feature;
use crate::cards::{Card, Catalog};

/// No constraint on a mask.
pub const NO_CONSTRAINT: u64 = 0;

/// Reserved value: the family carries no requested tag.
pub const EMPTY_FAMILY: u64 = 1;

/// Pair of feature masks entered by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureQuery {
    pub bits1: u64,
    pub bits2: u64,
}

/// Resolved matching rule for a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Matcher {
    /// Every card matches.
    All,
    /// At least one bit of the mask in family 1.
    AnyFirst(u64),
    /// At least one bit of the mask in family 2.
    AnySecond(u64),
    /// Every bit of both masks.
    Both(u64, u64),
}

impl Matcher {
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            Matcher::All => true,
            Matcher::AnyFirst(bits1) => card.feature_bits1 & bits1 != 0,
            Matcher::AnySecond(bits2) => card.feature_bits2 & bits2 != 0,
            Matcher::Both(bits1, bits2) => card.has_all_bits1(bits1) && card.has_all_bits2(bits2),
        }
    }
}

fn is_inactive(bits: u64) -> bool {
    bits == NO_CONSTRAINT || bits == EMPTY_FAMILY
}

impl FeatureQuery {
    /// Create a query from raw masks.
    #[must_use]
    pub const fn new(bits1: u64, bits2: u64) -> Self {
        Self { bits1, bits2 }
    }

    /// The query that matches everything.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self::new(NO_CONSTRAINT, NO_CONSTRAINT)
    }

    /// OR together the encoded bits of selected features.
    ///
    /// An empty selection is unconstrained.
    ///
    /// ```
    /// use deck_keeper::filter::{Feature, FeatureQuery};
    ///
    /// let q = FeatureQuery::from_features([Feature::Draw, Feature::Freeze]);
    /// assert_eq!(q, FeatureQuery::new((1 << 5) | (1 << 7), 1));
    /// assert_eq!(FeatureQuery::from_features([]), FeatureQuery::unconstrained());
    /// ```
    #[must_use]
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        features
            .into_iter()
            .map(Feature::to_bits)
            .fold(Self::unconstrained(), |q, (b1, b2)| Self::new(q.bits1 | b1, q.bits2 | b2))
    }

    /// Check if the query places no constraint at all.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.bits1 == NO_CONSTRAINT && self.bits2 == NO_CONSTRAINT
    }

    /// Resolve the matching rule.
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        let (bits1, bits2) = (self.bits1, self.bits2);
        if self.is_unconstrained() {
            Matcher::All
        } else if is_inactive(bits2) {
            Matcher::AnyFirst(bits1)
        } else if is_inactive(bits1) {
            Matcher::AnySecond(bits2)
        } else {
            Matcher::Both(bits1, bits2)
        }
    }

    /// Check a single card.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.matcher().matches(card)
    }

    /// Filter a card sequence, preserving order.
    pub fn apply<'a>(&self, cards: impl IntoIterator<Item = &'a Card>) -> Vector<Card> {
        let matcher = self.matcher();
        cards
            .into_iter()
            .filter(|card| matcher.matches(card))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for FeatureQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Query({:#x}, {:#x})", self.bits1, self.bits2)
    }
}

/// Filter the catalog by feature masks.
///
/// Pure and order-preserving; the catalog is not modified.
#[must_use]
pub fn filter_cards(catalog: &Catalog, bits1: u64, bits2: u64) -> Vector<Card> {
    let query = FeatureQuery::new(bits1, bits2);
    if query.is_unconstrained() {
        return catalog.snapshot();
    }
    query.apply(catalog.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(key: &str, bits1: u64, bits2: u64) -> Card {
        Card::new(key, key, key, "シグニ").with_features(bits1, bits2)
    }

    #[test]
    fn test_matcher_resolution() {
        assert_eq!(FeatureQuery::new(0, 0).matcher(), Matcher::All);
        assert_eq!(FeatureQuery::new(0b0101, 0).matcher(), Matcher::AnyFirst(0b0101));
        assert_eq!(FeatureQuery::new(0b0101, 1).matcher(), Matcher::AnyFirst(0b0101));
        assert_eq!(FeatureQuery::new(0, 0b1000).matcher(), Matcher::AnySecond(0b1000));
        assert_eq!(FeatureQuery::new(1, 0b1000).matcher(), Matcher::AnySecond(0b1000));
        assert_eq!(FeatureQuery::new(0b0110, 0b1001).matcher(), Matcher::Both(0b0110, 0b1001));
    }

    #[test]
    fn test_bits2_sentinel_checked_before_bits1() {
        // Both masks inactive but not zero: the first-family branch wins.
        assert_eq!(FeatureQuery::new(1, 1).matcher(), Matcher::AnyFirst(1));
        assert_eq!(FeatureQuery::new(0, 1).matcher(), Matcher::AnyFirst(0));
    }

    #[test]
    fn test_any_overlap_single_family() {
        let q = FeatureQuery::new(0b0101, 0);
        assert!(q.matches(&card("a", 0b0001, 0)));
        assert!(q.matches(&card("b", 0b0100, 0)));
        assert!(!q.matches(&card("c", 0b1010, 0xff)));
    }

    #[test]
    fn test_all_bits_when_both_active() {
        let q = FeatureQuery::new(0b0110, 0b1001);
        assert!(q.matches(&card("a", 0b0111, 0b1001)));
        assert!(!q.matches(&card("b", 0b0100, 0b1001)));
        assert!(!q.matches(&card("c", 0b0110, 0b0001)));
    }

    #[test]
    fn test_filter_cards_unconstrained_returns_catalog() {
        let catalog = Catalog::from_cards(vec![card("a", 0, 0), card("b", 4, 0)]).unwrap();
        let all = filter_cards(&catalog, 0, 0);
        assert_eq!(all, catalog.snapshot());
    }

    #[test]
    fn test_filter_cards_order_preserved() {
        let catalog = Catalog::from_cards(vec![
            card("a", 0b10, 0),
            card("b", 0b01, 0),
            card("c", 0b11, 0),
            card("d", 0b00, 0),
        ])
        .unwrap();
        let keys: Vec<_> = filter_cards(&catalog, 0b11, 0)
            .iter()
            .map(|c| c.pronounce.clone())
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_features_mixed_families() {
        let q = FeatureQuery::from_features([Feature::Draw, Feature::Shoot]);
        assert_eq!(q.bits1, (1 << 5) | 1);
        assert_eq!(q.bits2, (1 << 7) | 1);
        assert!(matches!(q.matcher(), Matcher::Both(_, _)));
    }
}
