//! PlayJoy Core - Shared cart model library.
//!
//! This crate provides the common types used across all PlayJoy cart
//! components:
//! - `cart` - The persisted cart engine (storage and notification ports)
//! - `cli` - Command-line tool for inspecting and mutating a cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no storage
//! access, no UI. The [`cart::Cart`] value type owns the merge/remove/totals
//! rules; persistence and presentation live behind ports in `playjoy-cart`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`cart`] - Line items and the ordered cart collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem, NewItem};
pub use types::*;
