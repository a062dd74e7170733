//! Typed vector view.

use std::marker::PhantomData;

use crate::engine::{Engine, ProtectGuard};
use crate::types::{Attr, ObjectKind, RHandle, RovError, ViewResult};
use crate::views::kind::ElementKind;

/// Numeric vector view.
pub type RealVector<'e, E> = VectorView<'e, E, f64>;
/// Integer vector view.
pub type IntVector<'e, E> = VectorView<'e, E, i32>;
/// Boolean vector view.
pub type LogicalVector<'e, E> = VectorView<'e, E, bool>;
/// String vector view.
pub type StrVector<'e, E> = VectorView<'e, E, String>;

/// Typed view over one homogeneous runtime vector.
///
/// Wraps a handle plus a cached length; element access is bounds-checked
/// against that length on every call and fails loud, guarding against
/// silent corruption flowing into downstream numeric code. Level and name
/// *lookups* are tolerant instead (absent metadata is a normal state for
/// most vectors) and return sentinel values.
///
/// A view allocated with [`alloc`](VectorView::alloc) keeps its object
/// protected from collection until the view is dropped or the object is
/// anchored into a parent structure.
#[derive(Debug)]
pub struct VectorView<'e, E: Engine, T: ElementKind> {
    engine: &'e E,
    handle: RHandle,
    len: usize,
    _guard: Option<ProtectGuard<'e, E>>,
    _kind: PhantomData<T>,
}

impl<'e, E: Engine, T: ElementKind> VectorView<'e, E, T> {
    /// Wrap a pre-existing runtime vector. Performs no allocation.
    ///
    /// Fails with `TypeMismatch` when the object is not of this view's
    /// element kind.
    pub fn wrap(engine: &'e E, handle: RHandle) -> ViewResult<Self> {
        let found = engine.kind_of(handle);
        if found != T::KIND {
            return Err(RovError::type_mismatch(T::KIND, found));
        }
        Ok(VectorView {
            engine,
            handle,
            len: engine.length(handle),
            _guard: None,
            _kind: PhantomData,
        })
    }

    /// Allocate a fresh vector of `len` zeroed cells, protected until the
    /// view is dropped or the object is anchored.
    pub fn alloc(engine: &'e E, len: usize) -> Self {
        let handle = engine.alloc_vector(T::KIND, len);
        VectorView {
            engine,
            handle,
            len,
            _guard: Some(ProtectGuard::new(engine, handle)),
            _kind: PhantomData,
        }
    }

    /// The underlying runtime handle.
    pub fn handle(&self) -> RHandle {
        self.handle
    }

    /// Element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> ViewResult<T::Value> {
        self.check(index, "VectorView::get")?;
        Ok(T::read(self.engine, self.handle, index))
    }

    /// Overwrite the element at `index` in the underlying runtime storage.
    ///
    /// For the string kind the text is duplicated into a runtime-managed
    /// cell (copy-in).
    pub fn set(&mut self, index: usize, value: T::Value) -> ViewResult<()> {
        self.check(index, "VectorView::set")?;
        T::write(self.engine, self.handle, index, value);
        Ok(())
    }

    /// Name associated with the element at `index`, or `""` when the vector
    /// has no names attribute or the slot is unset.
    pub fn name(&self, index: usize) -> ViewResult<String> {
        self.check(index, "VectorView::name")?;
        match self.engine.attribute(self.handle, Attr::Names) {
            Some(names) => Ok(self.engine.str_get(names, index)),
            None => Ok(String::new()),
        }
    }

    /// Set the name of the element at `index`, allocating an all-empty
    /// names attribute of the vector's length on first use.
    pub fn set_name(&mut self, index: usize, name: &str) -> ViewResult<()> {
        self.check(index, "VectorView::set_name")?;
        let names = match self.engine.attribute(self.handle, Attr::Names) {
            Some(names) => names,
            None => {
                let fresh = self.engine.alloc_vector(ObjectKind::Str, self.len);
                let guard = ProtectGuard::new(self.engine, fresh);
                // Anchors the name vector; the guard's window ends here.
                self.engine.set_attribute(self.handle, Attr::Names, fresh);
                drop(guard);
                fresh
            }
        };
        self.engine.str_set(names, index, name);
        Ok(())
    }

    /// 1-based position of `text` among this vector's level labels, or 0
    /// when the levels attribute is absent or the text is not a level.
    ///
    /// 0 is a defined "not found" sentinel, not an error: most vectors are
    /// not categorical.
    pub fn level_index_of(&self, text: &str) -> usize {
        if let Some(levels) = self.engine.attribute(self.handle, Attr::Levels) {
            for i in 0..self.engine.length(levels) {
                if self.engine.str_get(levels, i) == text {
                    return i + 1;
                }
            }
        }
        0
    }

    /// Label of the 1-based level `index`, or `""` when the levels
    /// attribute is absent or `index` is outside the label sequence.
    ///
    /// Tolerant by design, unlike element access.
    pub fn level_label(&self, index: usize) -> String {
        if index == 0 {
            return String::new();
        }
        match self.engine.attribute(self.handle, Attr::Levels) {
            Some(levels) if index <= self.engine.length(levels) => {
                self.engine.str_get(levels, index - 1)
            }
            _ => String::new(),
        }
    }

    fn check(&self, index: usize, what: &'static str) -> ViewResult<()> {
        if index >= self.len {
            return Err(RovError::out_of_bounds(what, index, self.len));
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "mem-engine"))]
mod tests {
    use super::*;
    use crate::engine::mem::MemEngine;
    use crate::engine::LOGICAL_NA;

    #[test]
    fn test_roundtrip_every_kind() {
        let engine = MemEngine::new();

        let mut reals = RealVector::alloc(&engine, 2);
        reals.set(1, 6.25).unwrap();
        assert_eq!(reals.get(1).unwrap(), 6.25);

        let mut ints = IntVector::alloc(&engine, 2);
        ints.set(0, -4).unwrap();
        assert_eq!(ints.get(0).unwrap(), -4);

        let mut flags = LogicalVector::alloc(&engine, 2);
        flags.set(0, true).unwrap();
        assert!(flags.get(0).unwrap());
        assert!(!flags.get(1).unwrap());

        let mut strs = StrVector::alloc(&engine, 2);
        strs.set(1, "gamma".to_string()).unwrap();
        assert_eq!(strs.get(1).unwrap(), "gamma");
    }

    #[test]
    fn test_integer_scenario() {
        // Vector [10,20,30,40,50]; set(2, 99); get(2) == 99; get(5) fails.
        let engine = MemEngine::new();
        let mut v = IntVector::alloc(&engine, 5);
        for (i, value) in [10, 20, 30, 40, 50].into_iter().enumerate() {
            v.set(i, value).unwrap();
        }
        v.set(2, 99).unwrap();
        assert_eq!(v.get(2).unwrap(), 99);
        let err = v.get(5).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.error_type(), "out_of_bounds");
    }

    #[test]
    fn test_bounds_edge() {
        let engine = MemEngine::new();
        let mut v = RealVector::alloc(&engine, 3);
        assert!(v.get(2).is_ok());
        assert!(v.set(2, 1.0).is_ok());
        assert!(v.name(2).is_ok());
        assert!(v.set_name(2, "c").is_ok());
        assert!(v.get(3).unwrap_err().is_out_of_bounds());
        assert!(v.set(3, 1.0).unwrap_err().is_out_of_bounds());
        assert!(v.name(3).unwrap_err().is_out_of_bounds());
        assert!(v.set_name(3, "d").unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_names_lazy_allocation() {
        let engine = MemEngine::new();
        let mut v = IntVector::alloc(&engine, 3);
        assert_eq!(v.name(1).unwrap(), "");
        v.set_name(1, "beta").unwrap();
        assert_eq!(v.name(0).unwrap(), "");
        assert_eq!(v.name(1).unwrap(), "beta");
        assert_eq!(v.name(2).unwrap(), "");
        // Names attribute has the vector's own length
        let names = engine.attribute(v.handle(), Attr::Names).unwrap();
        assert_eq!(engine.length(names), 3);
    }

    #[test]
    fn test_levels_lookup() {
        let engine = MemEngine::new();
        let codes = IntVector::alloc(&engine, 2);
        assert_eq!(codes.level_index_of("low"), 0);
        assert_eq!(codes.level_label(1), "");

        let mut labels = StrVector::alloc(&engine, 3);
        labels.set(0, "low".to_string()).unwrap();
        labels.set(1, "mid".to_string()).unwrap();
        labels.set(2, "high".to_string()).unwrap();
        engine.set_attribute(codes.handle(), Attr::Levels, labels.handle());

        assert_eq!(codes.level_index_of("mid"), 2);
        assert_eq!(codes.level_label(2), "mid");
        assert_eq!(codes.level_index_of("none"), 0);
        assert_eq!(codes.level_label(0), "");
        assert_eq!(codes.level_label(4), "");
    }

    #[test]
    fn test_missing_logical_reads_false() {
        let engine = MemEngine::new();
        let v = LogicalVector::alloc(&engine, 1);
        engine.logical_set(v.handle(), 0, LOGICAL_NA);
        assert!(!v.get(0).unwrap());
    }

    #[test]
    fn test_wrap_rejects_wrong_kind() {
        let engine = MemEngine::new();
        let ints = IntVector::alloc(&engine, 1);
        let err = RealVector::wrap(&engine, ints.handle()).unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_wrap_does_not_protect() {
        let engine = MemEngine::new();
        let h = engine.alloc_vector(ObjectKind::Real, 1);
        {
            let _view = RealVector::wrap(&engine, h).unwrap();
        }
        // Wrapping borrowed nothing; the object was never protected.
        engine.collect();
        assert!(!engine.is_live(h));
    }
}
