//! Card records and the session catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable catalog record keyed by `pronounce`
//! - `CardCompact`: Short-key wire form of a card
//! - `Format`: Tournament format a card is legal in
//! - `Catalog`: Ordered cards with pronounce/slug indexes

pub mod card;
pub mod catalog;
pub mod compact;
pub mod format;

pub use card::{Card, Story};
pub use catalog::Catalog;
pub use compact::CardCompact;
pub use format::Format;
