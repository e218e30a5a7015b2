//! PlayJoy Cart - The persisted cart engine.
//!
//! A thin CRUD layer over a single key-value slot, with UI notification
//! side effects. The engine owns no ambient globals: persistence and
//! presentation are injected ports, so the store runs identically against
//! browser local storage, a JSON file, or an in-memory test double.
//!
//! # Architecture
//!
//! - [`storage`] - The [`StorageSlot`] port plus memory and file backends
//! - [`notify`] - The [`CartNotifier`] port (badge refresh, toasts)
//! - [`toast`] - Toast lifecycle: replacement, visibility, fade, expiry
//! - [`store`] - [`CartStore`]: load/persist/add/remove/set-qty/clear and
//!   the derived totals
//!
//! # Persistence model
//!
//! The cart is lazily materialized from the slot on every read (no
//! in-memory cache across calls) and written back after every mutation.
//! Reads fail soft: an absent or unparsable slot value is an empty cart,
//! never an error. Writes can fail (quota, I/O) and surface as
//! [`CartStoreError`], logged and recoverable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod notify;
pub mod storage;
pub mod store;
pub mod toast;

mod error;

pub use error::CartStoreError;
pub use notify::{CartNotifier, LogNotifier, NullNotifier};
pub use storage::{FileSlot, MemorySlot, StorageError, StorageSlot};
pub use store::CartStore;
pub use toast::{Toast, ToastPhase, ToastRack};
