//! Test heap utilities.

use rov_core::{
    Attr, Engine, IntMatrix, IntVector, ListView, LogicalVector, MemEngine, RHandle, RealMatrix,
    RealVector, StrVector,
};

/// An in-memory engine with one-call builders for populated objects.
///
/// Views returned by the builders borrow the heap's engine, so the heap
/// must outlive them; all objects are freed together when the heap drops.
#[derive(Debug, Default)]
pub struct TestHeap {
    engine: MemEngine,
}

impl TestHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying engine, for direct boundary calls in tests.
    pub fn engine(&self) -> &MemEngine {
        &self.engine
    }

    /// Build a numeric vector holding `values`.
    pub fn real_vector(&self, values: &[f64]) -> RealVector<'_, MemEngine> {
        let mut v = RealVector::alloc(&self.engine, values.len());
        for (i, value) in values.iter().enumerate() {
            v.set(i, *value).expect("in-bounds write");
        }
        v
    }

    /// Build an integer vector holding `values`.
    pub fn int_vector(&self, values: &[i32]) -> IntVector<'_, MemEngine> {
        let mut v = IntVector::alloc(&self.engine, values.len());
        for (i, value) in values.iter().enumerate() {
            v.set(i, *value).expect("in-bounds write");
        }
        v
    }

    /// Build a boolean vector holding `values`.
    pub fn logical_vector(&self, values: &[bool]) -> LogicalVector<'_, MemEngine> {
        let mut v = LogicalVector::alloc(&self.engine, values.len());
        for (i, value) in values.iter().enumerate() {
            v.set(i, *value).expect("in-bounds write");
        }
        v
    }

    /// Build a string vector holding `values`.
    pub fn str_vector(&self, values: &[&str]) -> StrVector<'_, MemEngine> {
        let mut v = StrVector::alloc(&self.engine, values.len());
        for (i, value) in values.iter().enumerate() {
            v.set(i, value.to_string()).expect("in-bounds write");
        }
        v
    }

    /// Build a categorical vector: 1-based `codes` plus a `levels`
    /// label attribute.
    pub fn factor(&self, codes: &[i32], levels: &[&str]) -> IntVector<'_, MemEngine> {
        let v = self.int_vector(codes);
        let labels = self.str_vector(levels);
        self.engine
            .set_attribute(v.handle(), Attr::Levels, labels.handle());
        v
    }

    /// Build a record: a list with one keyed slot per `(key, handle)` pair.
    pub fn record(&self, fields: &[(&str, RHandle)]) -> ListView<'_, MemEngine> {
        let mut list = ListView::alloc(&self.engine, fields.len());
        for (i, (key, handle)) in fields.iter().copied().enumerate() {
            list.set_slot_keyed(i, handle, key).expect("in-bounds slot");
        }
        list
    }

    /// Build a zeroed numeric matrix.
    pub fn real_matrix(&self, rows: usize, cols: usize) -> RealMatrix<'_, MemEngine> {
        RealMatrix::alloc(&self.engine, rows, cols)
    }

    /// Build a zeroed integer matrix.
    pub fn int_matrix(&self, rows: usize, cols: usize) -> IntMatrix<'_, MemEngine> {
        IntMatrix::alloc(&self.engine, rows, cols)
    }
}
