//! Deck composition.
//!
//! ## Key Types
//!
//! - `DeckGroup`: The four slot groups and the classification rule
//! - `KeptCard`: A card plus the number of copies kept
//! - `Keep`: Group bookkeeping, clamping and trimming
//! - `Deck`: Record handed to the backend on save

pub mod group;
pub mod keep;
pub mod record;

pub use group::{DeckGroup, KeptCard, MAIN_DECK_TYPES, WHITE_DECK_TYPES};
pub use keep::{Keep, KeepEvent};
pub use record::{Deck, DeckEntry, DeckMetadata, DEFAULT_DECK_NAME, UNSAVED_DECK_ID};
