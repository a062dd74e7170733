//! Rov Test Kit - view-layer testing utilities.
//!
//! This crate provides utilities for testing the rov view layer against the
//! in-memory reference engine, so contracts can be exercised without an
//! embedded runtime.
//!
//! # Key Types
//!
//! - [`TestHeap`]: Owns a [`MemEngine`](rov_core::MemEngine) and builds
//!   populated vectors, factors, records and matrices in one call
//!
//! # Example
//!
//! ```
//! use rov_testkit::TestHeap;
//!
//! let heap = TestHeap::new();
//! let mut v = heap.int_vector(&[10, 20, 30, 40, 50]);
//! v.set(2, 99).unwrap();
//! assert_eq!(v.get(2).unwrap(), 99);
//! ```

mod conformance;
mod heap;
mod protection;

pub use heap::TestHeap;
