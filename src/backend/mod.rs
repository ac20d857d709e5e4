//! Backend boundary: catalog load, card detail lookup, deck save.
//!
//! ## Key Types
//!
//! - `Backend`: Async request/response trait implemented by the host
//! - `DetailCache`: Slug/pronounce keyed card cache with snapshots
//! - `InMemoryBackend`: Fixed card list backend for offline use and tests
//! - `wire`: Endpoint bodies

pub mod boundary;
pub mod cache;
pub mod memory;
pub mod wire;

pub use boundary::Backend;
pub use cache::DetailCache;
pub use memory::InMemoryBackend;
pub use wire::{
    CatalogResponse, CompactCatalogResponse, DetailResponse, SaveDeckRequest, SaveDeckResponse,
};
