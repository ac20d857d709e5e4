//! # deck-keeper
//!
//! Interactive state engine for browsing a collectible card catalog and
//! building decks from it.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: Every store is constructed per session and
//!    passed down. There is no global state.
//!
//! 2. **Infallible Interaction**: Filtering, navigation, deck edits and
//!    window stacking never fail. Out-of-range input resolves to a defined
//!    state (empty selection, clamped amount, no-op move).
//!
//! 3. **Opaque Backend**: Catalog load, detail lookup and deck save go
//!    through the async `Backend` trait. Transport is the host's business.
//!
//! ## Architecture
//!
//! - **Persistent Snapshots**: The catalog and filtered views are
//!   `im::Vector`s, so handing a snapshot to the filter worker is O(1) and
//!   shares no mutable memory.
//!
//! - **Last Delivery Wins**: Worker results replace the view in arrival
//!   order. Stale results are applied, not discarded.
//!
//! - **Notification**: Stores call their `Observers` after each mutation.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, observer registry
//! - `cards`: Card records, formats, catalog
//! - `filter`: Feature bitmask query, facets, filter worker
//! - `navigation`: Paged cursor with wraparound
//! - `deck`: Deck groups, quantity limits, trim and save
//! - `windows`: Floating panel positions and z-order
//! - `backend`: Backend trait, detail cache, in-memory backend
//! - `session`: Browser and session wiring

pub mod core;
pub mod cards;
pub mod filter;
pub mod navigation;
pub mod deck;
pub mod windows;
pub mod backend;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BrowserConfig, StackConfig, PanelLayout,
    Error, Result,
    ObserverId, Observers,
};

pub use crate::cards::{Card, CardCompact, Catalog, Format, Story};

pub use crate::filter::{
    filter_cards, Feature, FeatureQuery, FeatureTag,
    FacetFilter, LifeBurstFilter,
    FilterWorker, WorkerDelivery, WorkerMessage,
};

pub use crate::navigation::{CursorState, Navigator, Step};

pub use crate::deck::{Deck, DeckEntry, DeckGroup, DeckMetadata, Keep, KeepEvent, KeptCard};

pub use crate::windows::{PanelId, WindowEvent, WindowInfo, WindowStack};

pub use crate::backend::{Backend, DetailCache, InMemoryBackend};

pub use crate::session::{BrowserEvent, CardBrowser, Session};
