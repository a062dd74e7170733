//! Rov Core Library
//!
//! Typed accessor layer over an embedded, garbage-collected R-style object
//! runtime. The runtime owns all storage; this crate only wraps its opaque
//! handles in strongly typed, bounds-checked views.
//!
//! # Architecture
//!
//! - `types`: Core data types (RHandle, ObjectKind, Attr, error types)
//! - `engine`: The runtime boundary trait, GC protection guard, and a
//!   reference in-memory engine for embedding-free testing
//! - `views`: Typed views (VectorView, ListView, MatrixView, ObjectBox)

pub mod engine;
pub mod types;
pub mod views;

// Re-export commonly used types at crate root
pub use types::{Attr, ObjectKind, RHandle, RovError, ViewResult};

pub use engine::{Engine, ProtectGuard, LOGICAL_FALSE, LOGICAL_NA, LOGICAL_TRUE};

#[cfg(feature = "mem-engine")]
pub use engine::mem::MemEngine;

pub use views::{
    CellKind, ElementKind, IntMatrix, IntVector, ListView, LogicalVector, MatrixView, ObjectBox,
    RealMatrix, RealVector, StrVector, VectorView,
};
