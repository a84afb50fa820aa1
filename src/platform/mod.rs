//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (`Date.now()` on web)
//! - Frame callbacks (`requestAnimationFrame` on web)
//! - Storage (LocalStorage on web, in-memory elsewhere)

pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod time;

pub use storage::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use frame::RafScheduler;
#[cfg(target_arch = "wasm32")]
pub use time::DateClock;
