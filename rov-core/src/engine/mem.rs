//! Reference in-memory engine.
//!
//! A slotted heap standing in for the embedding runtime, close enough in
//! behavior to exercise the view layer: per-object attribute lists, a
//! protection multiset, and a mark-and-sweep [`collect`] that frees
//! everything unreachable from the protected set. Accessing a collected or
//! invalid handle panics, the way a real embedding would crash.
//!
//! [`collect`]: MemEngine::collect

use std::cell::RefCell;

use crate::engine::Engine;
use crate::types::{Attr, ObjectKind, RHandle};

/// Backing storage of one heap object.
#[derive(Debug, Clone)]
enum Data {
    Real(Vec<f64>),
    Int(Vec<i32>),
    Logical(Vec<i32>),
    Str(Vec<String>),
    List(Vec<RHandle>),
}

#[derive(Debug, Clone)]
struct Object {
    data: Data,
    attrs: Vec<(Attr, RHandle)>,
}

impl Object {
    fn kind(&self) -> ObjectKind {
        match self.data {
            Data::Real(_) => ObjectKind::Real,
            Data::Int(_) => ObjectKind::Int,
            Data::Logical(_) => ObjectKind::Logical,
            Data::Str(_) => ObjectKind::Str,
            Data::List(_) => ObjectKind::List,
        }
    }

    fn len(&self) -> usize {
        match &self.data {
            Data::Real(v) => v.len(),
            Data::Int(v) => v.len(),
            Data::Logical(v) => v.len(),
            Data::Str(v) => v.len(),
            Data::List(v) => v.len(),
        }
    }
}

/// In-memory [`Engine`] implementation.
///
/// Handles are heap slot numbers (1-based; 0 is the nil handle). `collect()`
/// sweeps every object not reachable from the protection multiset, tracing
/// through attributes and list slots.
#[derive(Debug, Default)]
pub struct MemEngine {
    heap: RefCell<Vec<Option<Object>>>,
    protected: RefCell<Vec<RHandle>>,
}

impl MemEngine {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live objects on the heap.
    pub fn live_count(&self) -> usize {
        self.heap.borrow().iter().filter(|s| s.is_some()).count()
    }

    /// Check whether a handle still refers to a live object.
    pub fn is_live(&self, h: RHandle) -> bool {
        if h.is_null() {
            return false;
        }
        let heap = self.heap.borrow();
        match heap.get(h.as_raw() - 1) {
            Some(slot) => slot.is_some(),
            None => false,
        }
    }

    /// Collect every object unreachable from the protected set.
    ///
    /// Reachability traces through attribute values and list slots. A real
    /// runtime collects at allocation points of its own choosing; calling
    /// this explicitly in tests simulates the worst case.
    pub fn collect(&self) {
        let roots: Vec<RHandle> = self.protected.borrow().clone();
        let mut heap = self.heap.borrow_mut();
        let mut marked = vec![false; heap.len()];
        let mut stack = roots;
        while let Some(h) = stack.pop() {
            if h.is_null() {
                continue;
            }
            let slot = h.as_raw() - 1;
            if marked[slot] {
                continue;
            }
            marked[slot] = true;
            if let Some(obj) = &heap[slot] {
                for (_, v) in &obj.attrs {
                    stack.push(*v);
                }
                if let Data::List(slots) = &obj.data {
                    stack.extend(slots.iter().copied());
                }
            }
        }
        for (slot, obj) in heap.iter_mut().enumerate() {
            if !marked[slot] {
                *obj = None;
            }
        }
    }

    fn alloc(&self, data: Data) -> RHandle {
        let mut heap = self.heap.borrow_mut();
        heap.push(Some(Object {
            data,
            attrs: Vec::new(),
        }));
        RHandle::from_raw(heap.len())
    }

    fn with_object<R>(&self, h: RHandle, what: &str, f: impl FnOnce(&Object) -> R) -> R {
        let heap = self.heap.borrow();
        let obj = heap
            .get(h.as_raw().wrapping_sub(1))
            .and_then(|s| s.as_ref())
            .unwrap_or_else(|| panic!("MemEngine::{}: dead or invalid handle {}", what, h));
        f(obj)
    }

    fn with_object_mut<R>(&self, h: RHandle, what: &str, f: impl FnOnce(&mut Object) -> R) -> R {
        let mut heap = self.heap.borrow_mut();
        let obj = heap
            .get_mut(h.as_raw().wrapping_sub(1))
            .and_then(|s| s.as_mut())
            .unwrap_or_else(|| panic!("MemEngine::{}: dead or invalid handle {}", what, h));
        f(obj)
    }
}

macro_rules! cell_accessors {
    ($get:ident, $set:ident, $variant:ident, $ty:ty) => {
        fn $get(&self, h: RHandle, index: usize) -> $ty {
            self.with_object(h, stringify!($get), |obj| match &obj.data {
                Data::$variant(v) => v[index].clone(),
                _ => panic!(
                    "MemEngine::{}: {} applied to a {} object",
                    stringify!($get),
                    stringify!($variant),
                    obj.kind()
                ),
            })
        }

        fn $set(&self, h: RHandle, index: usize, value: $ty) {
            self.with_object_mut(h, stringify!($set), |obj| match &mut obj.data {
                Data::$variant(v) => v[index] = value,
                _ => panic!(
                    "MemEngine::{}: {} applied to a {} object",
                    stringify!($set),
                    stringify!($variant),
                    obj.kind()
                ),
            })
        }
    };
}

impl Engine for MemEngine {
    fn kind_of(&self, h: RHandle) -> ObjectKind {
        if h.is_null() {
            return ObjectKind::Null;
        }
        self.with_object(h, "kind_of", |obj| obj.kind())
    }

    fn length(&self, h: RHandle) -> usize {
        if h.is_null() {
            return 0;
        }
        self.with_object(h, "length", |obj| obj.len())
    }

    cell_accessors!(real_get, real_set, Real, f64);
    cell_accessors!(int_get, int_set, Int, i32);
    cell_accessors!(logical_get, logical_set, Logical, i32);
    cell_accessors!(list_get, list_set, List, RHandle);

    fn str_get(&self, h: RHandle, index: usize) -> String {
        self.with_object(h, "str_get", |obj| match &obj.data {
            Data::Str(v) => v[index].clone(),
            _ => panic!("MemEngine::str_get applied to a {} object", obj.kind()),
        })
    }

    fn str_set(&self, h: RHandle, index: usize, value: &str) {
        self.with_object_mut(h, "str_set", |obj| match &mut obj.data {
            Data::Str(v) => v[index] = value.to_string(),
            _ => panic!("MemEngine::str_set applied to a {} object", obj.kind()),
        })
    }

    fn attribute(&self, h: RHandle, attr: Attr) -> Option<RHandle> {
        self.with_object(h, "attribute", |obj| {
            obj.attrs.iter().find(|(a, _)| *a == attr).map(|(_, v)| *v)
        })
    }

    fn set_attribute(&self, h: RHandle, attr: Attr, value: RHandle) {
        self.with_object_mut(h, "set_attribute", |obj| {
            obj.attrs.retain(|(a, _)| *a != attr);
            if !value.is_null() {
                obj.attrs.push((attr, value));
            }
        })
    }

    fn alloc_vector(&self, kind: ObjectKind, len: usize) -> RHandle {
        let data = match kind {
            ObjectKind::Real => Data::Real(vec![0.0; len]),
            ObjectKind::Int => Data::Int(vec![0; len]),
            ObjectKind::Logical => Data::Logical(vec![0; len]),
            ObjectKind::Str => Data::Str(vec![String::new(); len]),
            other => panic!("MemEngine::alloc_vector: {} is not a vector kind", other),
        };
        self.alloc(data)
    }

    fn alloc_list(&self, len: usize) -> RHandle {
        self.alloc(Data::List(vec![RHandle::NULL; len]))
    }

    fn protect(&self, h: RHandle) {
        self.protected.borrow_mut().push(h);
    }

    fn unprotect(&self, h: RHandle) {
        let mut protected = self.protected.borrow_mut();
        match protected.iter().rposition(|p| *p == h) {
            Some(i) => {
                protected.remove(i);
            }
            None => panic!("MemEngine::unprotect: handle {} is not protected", h),
        }
    }
}
