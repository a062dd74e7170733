//! List/record view.

use crate::engine::{Engine, ProtectGuard};
use crate::types::{Attr, ObjectKind, RHandle, RovError, ViewResult};
use crate::views::object::ObjectBox;
use crate::views::vector::StrVector;

/// View over a heterogeneous runtime list, with optional string keys.
///
/// The key sequence, when present, is held as a vector view owned
/// exclusively by this list view and dropped with it; the underlying list
/// object itself stays runtime-owned and is never freed by the view.
///
/// Positional lookup fails loud on a bad index; keyed lookup fails loud on
/// a missing key because callers rely on required fields being present.
/// [`has_key`](ListView::has_key) is the tolerant form.
#[derive(Debug)]
pub struct ListView<'e, E: Engine> {
    engine: &'e E,
    handle: RHandle,
    len: usize,
    keys: Option<StrVector<'e, E>>,
    _guard: Option<ProtectGuard<'e, E>>,
}

impl<'e, E: Engine> ListView<'e, E> {
    /// Wrap a pre-existing runtime list. Performs no allocation.
    ///
    /// Fails with `NotAList` when the handle is not a list; a non-list here
    /// is a programmer error at the boundary, not a recoverable condition.
    pub fn wrap(engine: &'e E, handle: RHandle) -> ViewResult<Self> {
        let kind = engine.kind_of(handle);
        if kind != ObjectKind::List {
            return Err(RovError::not_a_list(kind));
        }
        let keys = match engine.attribute(handle, Attr::Names) {
            Some(names) => Some(StrVector::wrap(engine, names)?),
            None => None,
        };
        Ok(ListView {
            engine,
            handle,
            len: engine.length(handle),
            keys,
            _guard: None,
        })
    }

    /// Allocate a fresh list of `len` nil slots and no keys, protected
    /// until the view is dropped or the object is anchored.
    pub fn alloc(engine: &'e E, len: usize) -> Self {
        let handle = engine.alloc_list(len);
        ListView {
            engine,
            handle,
            len,
            keys: None,
            _guard: Some(ProtectGuard::new(engine, handle)),
        }
    }

    /// The underlying runtime handle.
    pub fn handle(&self) -> RHandle {
        self.handle
    }

    /// Slot count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the list has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True iff a key sequence exists and contains exactly `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.key_position(key).is_some()
    }

    /// The slot at `index`, boxed.
    pub fn get(&self, index: usize) -> ViewResult<ObjectBox<'e, E>> {
        if index >= self.len {
            return Err(RovError::out_of_bounds("ListView::get", index, self.len));
        }
        Ok(ObjectBox::new(self.engine, self.engine.list_get(self.handle, index)))
    }

    /// The slot whose key is exactly `key`, boxed.
    ///
    /// Fails with `KeyNotFound` when no key sequence exists or nothing
    /// matches.
    pub fn get_by_key(&self, key: &str) -> ViewResult<ObjectBox<'e, E>> {
        match self.key_position(key) {
            Some(index) => Ok(ObjectBox::new(
                self.engine,
                self.engine.list_get(self.handle, index),
            )),
            None => Err(RovError::key_not_found(key)),
        }
    }

    /// Replace the handle at `index`, anchoring it in the list.
    pub fn set_slot(&mut self, index: usize, value: RHandle) -> ViewResult<()> {
        if index >= self.len {
            return Err(RovError::out_of_bounds("ListView::set_slot", index, self.len));
        }
        self.engine.list_set(self.handle, index, value);
        Ok(())
    }

    /// Replace the handle at `index` and set its key, allocating an
    /// all-empty key sequence of the list's length on first use.
    pub fn set_slot_keyed(&mut self, index: usize, value: RHandle, key: &str) -> ViewResult<()> {
        if index >= self.len {
            return Err(RovError::out_of_bounds(
                "ListView::set_slot_keyed",
                index,
                self.len,
            ));
        }
        if self.keys.is_none() {
            let fresh = StrVector::alloc(self.engine, self.len);
            // Anchors the key vector; its guard may release any time after.
            self.engine
                .set_attribute(self.handle, Attr::Names, fresh.handle());
            self.keys = Some(fresh);
        }
        if let Some(keys) = &mut self.keys {
            keys.set(index, key.to_string())?;
        }
        self.engine.list_set(self.handle, index, value);
        Ok(())
    }

    fn key_position(&self, key: &str) -> Option<usize> {
        let keys = self.keys.as_ref()?;
        (0..keys.len()).find(|&i| self.engine.str_get(keys.handle(), i) == key)
    }
}
