//! Typed views over runtime-owned objects.
//!
//! Each view borrows an [`Engine`](crate::engine::Engine), wraps one handle,
//! and caches only what the runtime cannot change behind its back for the
//! view's lifetime (length, matrix shape). Metadata that can appear later
//! (names, levels, dimension labels) is fetched through the attribute
//! protocol on every call.

pub mod kind;
pub mod list;
pub mod matrix;
pub mod object;
pub mod vector;

pub use kind::{CellKind, ElementKind};
pub use list::ListView;
pub use matrix::{IntMatrix, MatrixView, RealMatrix};
pub use object::ObjectBox;
pub use vector::{IntVector, LogicalVector, RealVector, StrVector, VectorView};
