//! Paged cursor navigation over the filtered card view.
//!
//! ## Key Types
//!
//! - `CursorState`: Page and in-page cursor
//! - `Navigator`: Stepping, jumping and page turning with wraparound
//! - `Step`: One card forward or backward

pub mod cursor;

pub use cursor::{page_count, page_range, CursorState, Navigator, Step};
