//! Floating panel stacking.
//!
//! ## Key Types
//!
//! - `PanelId`: The fixed set of floating panels
//! - `WindowInfo`: Position and z value of one panel
//! - `WindowStack`: Drag target, raise-to-front and z renormalization

pub mod stack;

pub use stack::{PanelId, WindowEvent, WindowInfo, WindowStack};
