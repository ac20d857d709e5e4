//! Request and response bodies of the backend endpoints.
//!
//! Host `Backend` implementations decode these and convert them into the
//! results the stores expect.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCompact};
use crate::core::{Error, Result};
use crate::deck::Deck;

/// Body of the catalog list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub cards: Vec<Card>,
}

/// Body of the catalog list endpoint in compact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactCatalogResponse {
    pub cards: Vec<CardCompact>,
}

impl CompactCatalogResponse {
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards.into_iter().map(Card::from).collect()
    }
}

/// Body of the card detail endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub success: bool,
    pub card: Option<Card>,
}

impl DetailResponse {
    /// A card only when the backend reports success and sent one.
    #[must_use]
    pub fn into_card(self) -> Option<Card> {
        if self.success {
            self.card
        } else {
            None
        }
    }
}

/// Body sent to the deck save endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDeckRequest {
    pub deck: Deck,
}

/// Body returned by the deck save endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDeckResponse {
    pub success: bool,
}

impl SaveDeckResponse {
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(Error::SaveRejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_response() {
        let found: DetailResponse =
            serde_json::from_str(r#"{"success":true,"card":{"slug":"WX-1","pronounce":"a"}}"#).unwrap();
        assert_eq!(found.into_card().unwrap().slug, "WX-1");

        let missing: DetailResponse = serde_json::from_str(r#"{"success":true,"card":null}"#).unwrap();
        assert!(missing.into_card().is_none());

        let failed: DetailResponse =
            serde_json::from_str(r#"{"success":false,"card":{"slug":"WX-1"}}"#).unwrap();
        assert!(failed.into_card().is_none());
    }

    #[test]
    fn test_save_response() {
        assert!(SaveDeckResponse { success: true }.into_result().is_ok());
        assert!(matches!(
            SaveDeckResponse { success: false }.into_result(),
            Err(Error::SaveRejected)
        ));
    }

    #[test]
    fn test_compact_catalog() {
        let body: CompactCatalogResponse =
            serde_json::from_str(r#"{"cards":[{"s":"WX-1","p":"a","t":"シグニ"},{"s":"WX-2","p":"b"}]}"#)
                .unwrap();
        let cards = body.into_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].card_type, "シグニ");
    }
}
