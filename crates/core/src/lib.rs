//! Basket Core - Shared types library.
//!
//! This crate provides common types used across all Basket components:
//! - `cart` - The cart state engine and its persistence adapter
//! - `cli` - Command-line tool for inspecting and mutating a stored cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! process state. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for catalog identifiers and display prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
