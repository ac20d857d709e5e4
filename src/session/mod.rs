//! Browsing session wiring.
//!
//! ## Key Types
//!
//! - `CardBrowser`: Catalog, filters, navigation and detail cache
//! - `Session`: Owns the browser, the deck, the panels and the backend

pub mod browser;
pub mod lifecycle;

pub use browser::{BrowserEvent, CardBrowser};
pub use lifecycle::Session;
