//! Typed matrix view.

use std::marker::PhantomData;

use crate::engine::{Engine, ProtectGuard};
use crate::types::{Attr, RHandle, RovError, ViewResult};
use crate::views::kind::CellKind;
use crate::views::list::ListView;
use crate::views::vector::StrVector;

/// Numeric matrix view.
pub type RealMatrix<'e, E> = MatrixView<'e, E, f64>;
/// Integer matrix view.
pub type IntMatrix<'e, E> = MatrixView<'e, E, i32>;

/// Typed view over a two-dimensional, column-major runtime array.
///
/// The runtime's column-major layout is authoritative: element `(i, j)`
/// lives at linear offset `j * rows + i` in the shared backing vector, and
/// the view never transposes. Cells are addressed by offset through the
/// engine's typed accessors rather than a cached base pointer, so nothing
/// here can dangle if the runtime relocates the storage.
///
/// Element access is bounds-checked against the cached shape, symmetric
/// with the vector and list views.
#[derive(Debug)]
pub struct MatrixView<'e, E: Engine, T: CellKind> {
    engine: &'e E,
    handle: RHandle,
    rows: usize,
    cols: usize,
    _guard: Option<ProtectGuard<'e, E>>,
    _kind: PhantomData<T>,
}

impl<'e, E: Engine, T: CellKind> MatrixView<'e, E, T> {
    /// Wrap a pre-existing runtime matrix. Performs no allocation.
    ///
    /// Fails with `TypeMismatch` when the object is not a vector of this
    /// view's cell kind carrying a two-element `dim` attribute.
    pub fn wrap(engine: &'e E, handle: RHandle) -> ViewResult<Self> {
        let found = engine.kind_of(handle);
        if found != T::KIND {
            return Err(RovError::type_mismatch(T::KIND, found));
        }
        let dim = engine
            .attribute(handle, Attr::Dim)
            .filter(|d| engine.length(*d) == 2)
            .ok_or_else(|| RovError::type_mismatch(T::KIND, found))?;
        Ok(MatrixView {
            engine,
            handle,
            rows: engine.int_get(dim, 0) as usize,
            cols: engine.int_get(dim, 1) as usize,
            _guard: None,
            _kind: PhantomData,
        })
    }

    /// Allocate a fresh `rows x cols` matrix of zeroed cells, protected
    /// until the view is dropped or the object is anchored.
    pub fn alloc(engine: &'e E, rows: usize, cols: usize) -> Self {
        let handle = engine.alloc_matrix(T::KIND, rows, cols);
        MatrixView {
            engine,
            handle,
            rows,
            cols,
            _guard: Some(ProtectGuard::new(engine, handle)),
            _kind: PhantomData,
        }
    }

    /// The underlying runtime handle.
    pub fn handle(&self) -> RHandle {
        self.handle
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> ViewResult<T::Value> {
        self.check(row, col, "MatrixView::get")?;
        Ok(T::read(self.engine, self.handle, col * self.rows + row))
    }

    /// Overwrite the cell at `(row, col)` in the shared backing storage.
    pub fn set(&mut self, row: usize, col: usize, value: T::Value) -> ViewResult<()> {
        self.check(row, col, "MatrixView::set")?;
        T::write(self.engine, self.handle, col * self.rows + row, value);
        Ok(())
    }

    /// Set the label of column `col`, allocating the dimension-label
    /// container on first use (row-label slot left nil, column-label slot
    /// an all-empty string vector of the column count).
    pub fn set_column_label(&mut self, col: usize, label: &str) -> ViewResult<()> {
        if col >= self.cols {
            return Err(RovError::out_of_bounds(
                "MatrixView::set_column_label",
                col,
                self.cols,
            ));
        }
        let dimnames = match self.engine.attribute(self.handle, Attr::DimNames) {
            Some(h) => h,
            None => {
                let fresh = ListView::alloc(self.engine, 2);
                // Anchors the container; its guard may release any time after.
                self.engine
                    .set_attribute(self.handle, Attr::DimNames, fresh.handle());
                fresh.handle()
            }
        };
        let mut dimnames = ListView::wrap(self.engine, dimnames)?;
        let labels = match dimnames.get(1)?.handle() {
            h if h.is_null() => {
                let fresh = StrVector::alloc(self.engine, self.cols);
                dimnames.set_slot(1, fresh.handle())?;
                fresh.handle()
            }
            h => h,
        };
        let mut labels = StrVector::wrap(self.engine, labels)?;
        labels.set(col, label.to_string())
    }

    fn check(&self, row: usize, col: usize, what: &'static str) -> ViewResult<()> {
        if row >= self.rows {
            return Err(RovError::out_of_bounds(what, row, self.rows));
        }
        if col >= self.cols {
            return Err(RovError::out_of_bounds(what, col, self.cols));
        }
        Ok(())
    }
}
