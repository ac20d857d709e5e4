//! Card filtering.
//!
//! ## Key Types
//!
//! - `Feature`: Gameplay tag with a fixed bit in one of two masks
//! - `FeatureQuery`: Mask pair entered by the user, see `filter_cards`
//! - `FacetFilter`: Word, color, type, format and life burst facets
//! - `FilterWorker`: Facet filtering on a background thread

pub mod facets;
pub mod feature;
pub mod query;
pub mod worker;

pub use facets::{FacetFilter, LifeBurstFilter};
pub use feature::{Feature, FeatureFamily, FeatureTag};
pub use query::{filter_cards, FeatureQuery, Matcher, EMPTY_FAMILY, NO_CONSTRAINT};
pub use worker::{FacetState, FilterWorker, WorkerDelivery, WorkerMessage};
