//! Scoped GC protection.

use crate::engine::Engine;
use crate::types::RHandle;

/// Protects an object from collection for the guard's lifetime.
///
/// Replaces manual protect/unprotect bracketing: the protection is acquired
/// on construction and released on drop, so every exit path out of a
/// construction sequence closes the window. Views that allocate hold one of
/// these until they are dropped; once the object is anchored into a parent
/// the eventual release is a no-op in GC terms.
#[derive(Debug)]
pub struct ProtectGuard<'e, E: Engine> {
    engine: &'e E,
    handle: RHandle,
}

impl<'e, E: Engine> ProtectGuard<'e, E> {
    /// Protect `handle` until the guard is dropped.
    pub fn new(engine: &'e E, handle: RHandle) -> Self {
        engine.protect(handle);
        ProtectGuard { engine, handle }
    }

    /// The protected handle.
    pub fn handle(&self) -> RHandle {
        self.handle
    }
}

impl<E: Engine> Drop for ProtectGuard<'_, E> {
    fn drop(&mut self) {
        self.engine.unprotect(self.handle);
    }
}

#[cfg(all(test, feature = "mem-engine"))]
mod tests {
    use super::*;
    use crate::engine::mem::MemEngine;
    use crate::types::ObjectKind;

    #[test]
    fn test_guard_releases_on_drop() {
        let engine = MemEngine::new();
        let h = engine.alloc_vector(ObjectKind::Real, 3);
        {
            let _guard = ProtectGuard::new(&engine, h);
            engine.collect();
            assert!(engine.is_live(h));
        }
        engine.collect();
        assert!(!engine.is_live(h));
    }

    #[test]
    fn test_nested_guards_release_innermost_first() {
        let engine = MemEngine::new();
        let h = engine.alloc_vector(ObjectKind::Int, 1);
        let outer = ProtectGuard::new(&engine, h);
        {
            let _inner = ProtectGuard::new(&engine, h);
        }
        engine.collect();
        assert!(engine.is_live(h));
        drop(outer);
        engine.collect();
        assert!(!engine.is_live(h));
    }
}
