//! Integration tests for Basket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Durable-store round-trips through the
//!   file-backed storage, including recovery from corrupt state
//! - `cart_wire_shape` - The persisted JSON shape consumed by other
//!   clients of the same local store

#![cfg_attr(not(test), forbid(unsafe_code))]
