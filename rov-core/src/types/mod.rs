//! Core data types for the view layer.

pub mod error;
pub mod handle;

pub use error::{RovError, ViewResult};
pub use handle::{Attr, ObjectKind, RHandle};
