//! Opaque handles and the attribute protocol vocabulary.

use std::fmt;

/// Opaque reference to a runtime-owned object.
///
/// Ownership stays with the embedding runtime's garbage collector; a handle
/// is only a borrowed token and carries no lifetime of its own. Views cache
/// metadata (length, dimensions) next to the handle but never the storage.
///
/// The zero value is the runtime's nil object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RHandle(usize);

impl RHandle {
    /// The runtime's nil object.
    pub const NULL: RHandle = RHandle(0);

    /// Build a handle from a raw word (e.g. a pointer from a real embedding).
    pub fn from_raw(raw: usize) -> Self {
        RHandle(raw)
    }

    /// Get the raw word backing this handle.
    pub fn as_raw(&self) -> usize {
        self.0
    }

    /// Check whether this is the nil object.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "<null>")
        } else {
            write!(f, "<obj {}>", self.0)
        }
    }
}

/// Kind of a runtime-owned object.
///
/// Matrices are not a distinct kind: a matrix is a `Real` or `Int` vector
/// carrying a two-element integer [`Attr::Dim`] attribute, exactly as in
/// the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The nil object.
    Null,
    /// Double-precision numeric vector.
    Real,
    /// Integer vector.
    Int,
    /// Boolean vector (tri-state storage: true/false/missing).
    Logical,
    /// String vector.
    Str,
    /// Heterogeneous ordered collection of object handles.
    List,
}

impl ObjectKind {
    /// Get the kind name as used in the runtime's own vocabulary.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Null => "null",
            ObjectKind::Real => "numeric",
            ObjectKind::Int => "integer",
            ObjectKind::Logical => "logical",
            ObjectKind::Str => "character",
            ObjectKind::List => "list",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Well-known attribute slots of the runtime's attribute protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Per-element names of a vector or list (string vector, same length).
    Names,
    /// Ordered level labels of a categorical vector (string vector).
    Levels,
    /// Matrix shape (integer vector of length 2: rows, cols).
    Dim,
    /// Dimension labels (two-slot list: row labels, column labels).
    DimNames,
}

impl Attr {
    /// Get the attribute's symbol name in the host runtime.
    pub fn symbol(&self) -> &'static str {
        match self {
            Attr::Names => "names",
            Attr::Levels => "levels",
            Attr::Dim => "dim",
            Attr::DimNames => "dimnames",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
