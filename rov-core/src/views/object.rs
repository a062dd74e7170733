//! Untyped object box.

use crate::engine::Engine;
use crate::types::{RHandle, ViewResult};
use crate::views::vector::{IntVector, RealVector};

/// Minimal wrapper around one opaque runtime handle.
///
/// Carries no cached metadata; it exists to hand an untyped slot (a list
/// element, a caller argument) to code that will pick a typed view for it.
/// Conversions reuse the same handle, copying nothing.
#[derive(Debug, Clone, Copy)]
pub struct ObjectBox<'e, E: Engine> {
    engine: &'e E,
    handle: RHandle,
}

impl<'e, E: Engine> ObjectBox<'e, E> {
    /// Box an existing handle.
    pub fn new(engine: &'e E, handle: RHandle) -> Self {
        ObjectBox { engine, handle }
    }

    /// The underlying runtime handle.
    pub fn handle(&self) -> RHandle {
        self.handle
    }

    /// View this object as a numeric vector.
    ///
    /// Fails with `TypeMismatch` when the object is not numeric.
    pub fn as_real_vector(&self) -> ViewResult<RealVector<'e, E>> {
        RealVector::wrap(self.engine, self.handle)
    }

    /// View this object as an integer vector.
    ///
    /// Fails with `TypeMismatch` when the object is not integer.
    pub fn as_integer_vector(&self) -> ViewResult<IntVector<'e, E>> {
        IntVector::wrap(self.engine, self.handle)
    }
}

#[cfg(all(test, feature = "mem-engine"))]
mod tests {
    use super::*;
    use crate::engine::mem::MemEngine;
    use crate::types::ObjectKind;

    #[test]
    fn test_conversion_shares_the_handle() {
        let engine = MemEngine::new();
        let h = engine.alloc_vector(ObjectKind::Real, 2);
        engine.real_set(h, 0, 3.5);

        let boxed = ObjectBox::new(&engine, h);
        let view = boxed.as_real_vector().unwrap();
        assert_eq!(view.handle(), h);
        assert_eq!(view.get(0).unwrap(), 3.5);
    }

    #[test]
    fn test_incompatible_conversion_fails() {
        let engine = MemEngine::new();
        let h = engine.alloc_vector(ObjectKind::Str, 1);
        let boxed = ObjectBox::new(&engine, h);
        assert!(boxed.as_real_vector().unwrap_err().is_type_mismatch());
        assert!(boxed.as_integer_vector().unwrap_err().is_type_mismatch());
    }
}
