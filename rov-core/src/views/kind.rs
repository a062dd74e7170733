//! Per-kind element traits.
//!
//! One generic [`VectorView`](crate::views::VectorView) parameterized by an
//! element kind replaces a hand-written view per primitive kind; the trait
//! carries exactly the per-kind pieces (kind tag, read a cell, write a
//! cell), everything else is shared.

use crate::engine::{Engine, LOGICAL_FALSE, LOGICAL_TRUE};
use crate::types::{ObjectKind, RHandle};

/// A primitive element kind a vector view can be specialized to.
///
/// Implemented for `f64`, `i32`, `bool` and `String`.
pub trait ElementKind {
    /// Owned value type crossing the view boundary.
    type Value;

    /// The runtime object kind backing this element kind.
    const KIND: ObjectKind;

    /// Read the cell at `index`. The caller has bounds-checked `index`.
    fn read<E: Engine>(engine: &E, h: RHandle, index: usize) -> Self::Value;

    /// Write the cell at `index`. The caller has bounds-checked `index`.
    fn write<E: Engine>(engine: &E, h: RHandle, index: usize, value: Self::Value);
}

impl ElementKind for f64 {
    type Value = f64;
    const KIND: ObjectKind = ObjectKind::Real;

    fn read<E: Engine>(engine: &E, h: RHandle, index: usize) -> f64 {
        engine.real_get(h, index)
    }

    fn write<E: Engine>(engine: &E, h: RHandle, index: usize, value: f64) {
        engine.real_set(h, index, value);
    }
}

impl ElementKind for i32 {
    type Value = i32;
    const KIND: ObjectKind = ObjectKind::Int;

    fn read<E: Engine>(engine: &E, h: RHandle, index: usize) -> i32 {
        engine.int_get(h, index)
    }

    fn write<E: Engine>(engine: &E, h: RHandle, index: usize, value: i32) {
        engine.int_set(h, index, value);
    }
}

/// Boolean cells are tri-state in storage (true, false, missing) but the
/// view contract is plain `bool`: a missing cell reads as `false` (only a
/// stored true is `true`), and writes store only true/false, so values
/// round-tripped through a view never reintroduce missingness.
impl ElementKind for bool {
    type Value = bool;
    const KIND: ObjectKind = ObjectKind::Logical;

    fn read<E: Engine>(engine: &E, h: RHandle, index: usize) -> bool {
        engine.logical_get(h, index) == LOGICAL_TRUE
    }

    fn write<E: Engine>(engine: &E, h: RHandle, index: usize, value: bool) {
        engine.logical_set(h, index, if value { LOGICAL_TRUE } else { LOGICAL_FALSE });
    }
}

/// String cells are copy-in/copy-out: reads duplicate the runtime's cell
/// text into an owned `String`, writes duplicate the given text into a
/// runtime-managed cell.
impl ElementKind for String {
    type Value = String;
    const KIND: ObjectKind = ObjectKind::Str;

    fn read<E: Engine>(engine: &E, h: RHandle, index: usize) -> String {
        engine.str_get(h, index)
    }

    fn write<E: Engine>(engine: &E, h: RHandle, index: usize, value: String) {
        engine.str_set(h, index, &value);
    }
}

/// Element kinds a matrix can be made of (the runtime only lays out numeric
/// and integer matrices).
pub trait CellKind: ElementKind {}

impl CellKind for f64 {}
impl CellKind for i32 {}
