//! The runtime boundary.
//!
//! [`Engine`] is the seam between the view layer and the embedding runtime:
//! kind predicates, typed element accessors, the attribute protocol,
//! allocation, and temporary GC protection. A real embedding implements it
//! over the runtime's C API; [`mem::MemEngine`] implements it over a local
//! heap so the crate tests without an embedded runtime.

pub mod guard;
#[cfg(feature = "mem-engine")]
pub mod mem;

pub use guard::ProtectGuard;

use crate::types::{Attr, ObjectKind, RHandle};

/// Stored value of a false logical cell.
pub const LOGICAL_FALSE: i32 = 0;
/// Stored value of a true logical cell.
pub const LOGICAL_TRUE: i32 = 1;
/// Stored value of a missing logical cell (the runtime's NA sentinel).
pub const LOGICAL_NA: i32 = i32::MIN;

/// Boundary trait for the embedding runtime's object model.
///
/// All storage is owned by the runtime; the trait only reads and writes it
/// in place. Element accessors are infallible for in-contract arguments:
/// views bounds-check against their cached extents before calling, so a
/// handle of the wrong kind or an out-of-range position here is a contract
/// violation, not a recoverable condition (implementations may panic).
///
/// Deliberately not `Send`/`Sync`: the embedding runtime is single-threaded
/// per call context and so is everything built on it.
pub trait Engine {
    /// Kind of the object behind a handle.
    fn kind_of(&self, h: RHandle) -> ObjectKind;

    /// Element count of a vector or list; 0 for the nil object.
    fn length(&self, h: RHandle) -> usize;

    // Typed element accessors, by position.

    fn real_get(&self, h: RHandle, index: usize) -> f64;
    fn real_set(&self, h: RHandle, index: usize, value: f64);

    fn int_get(&self, h: RHandle, index: usize) -> i32;
    fn int_set(&self, h: RHandle, index: usize, value: i32);

    /// Raw tri-state logical cell ([`LOGICAL_FALSE`], [`LOGICAL_TRUE`] or
    /// [`LOGICAL_NA`]).
    fn logical_get(&self, h: RHandle, index: usize) -> i32;
    fn logical_set(&self, h: RHandle, index: usize, value: i32);

    /// Copy the text out of a string cell.
    fn str_get(&self, h: RHandle, index: usize) -> String;
    /// Copy text into a string cell (the runtime duplicates it into a
    /// runtime-managed cell).
    fn str_set(&self, h: RHandle, index: usize, value: &str);

    /// Handle held in a list slot (possibly nil).
    fn list_get(&self, h: RHandle, index: usize) -> RHandle;
    /// Store a handle into a list slot, anchoring it in the list.
    fn list_set(&self, h: RHandle, index: usize, value: RHandle);

    // Attribute protocol.

    /// Look up a well-known attribute; `None` when unset.
    fn attribute(&self, h: RHandle, attr: Attr) -> Option<RHandle>;
    /// Set a well-known attribute, anchoring the value in the object.
    /// Setting the nil handle clears the attribute.
    fn set_attribute(&self, h: RHandle, attr: Attr, value: RHandle);

    // Allocation. Freshly allocated objects are unprotected; callers bracket
    // them with a ProtectGuard until anchored.

    /// Allocate a vector of a primitive kind. Cells start zeroed (`0.0`,
    /// `0`, false, or the empty string).
    fn alloc_vector(&self, kind: ObjectKind, len: usize) -> RHandle;

    /// Allocate a list; slots start as the nil handle.
    fn alloc_list(&self, len: usize) -> RHandle;

    /// Allocate a matrix: a vector of `rows * cols` cells carrying a
    /// two-element `dim` attribute. The construction window is protected
    /// internally; the returned handle is unprotected.
    fn alloc_matrix(&self, kind: ObjectKind, rows: usize, cols: usize) -> RHandle {
        let m = self.alloc_vector(kind, rows * cols);
        self.protect(m);
        let dim = self.alloc_vector(ObjectKind::Int, 2);
        self.protect(dim);
        self.int_set(dim, 0, rows as i32);
        self.int_set(dim, 1, cols as i32);
        self.set_attribute(m, Attr::Dim, dim);
        self.unprotect(dim);
        self.unprotect(m);
        m
    }

    // Temporary GC protection.

    /// Protect an object from collection until the matching [`unprotect`].
    ///
    /// Prefer [`ProtectGuard`], which releases on every exit path.
    ///
    /// [`unprotect`]: Engine::unprotect
    fn protect(&self, h: RHandle);

    /// Release one protection of an object.
    fn unprotect(&self, h: RHandle);
}
