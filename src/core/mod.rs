//! Core types shared by every store: errors, configuration, notification.
//!
//! Nothing in here knows about card rules. Stores build on these pieces
//! and own their state explicitly.

pub mod config;
pub mod error;
pub mod observer;

pub use config::{BrowserConfig, PanelLayout, StackConfig, DEFAULT_PAGE_SIZE};
pub use error::{Error, Result};
pub use observer::{ObserverId, Observers};
